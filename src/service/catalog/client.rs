use std::{
    cell::RefCell,
    collections::{hash_map::Entry, HashMap},
    fmt,
    fs::{create_dir, File},
    io::{self, Read, Write},
    rc::Rc,
};

use json::JsonValue;
use reqwest::{blocking::Client, StatusCode};

/// Static catalog host. There is no backend behind this tool; both endpoints
/// are read-only JSON files.
const CATALOG_BASE_URL: &str = "https://cdn.buildforge.app/catalog/latest/";

pub struct CatalogClient {
    write_json: bool,
    load_local_json: bool,
    client: Client,
    cache: RefCell<HashMap<CatalogRequest, Rc<JsonValue>>>,
}

impl CatalogClient {
    pub fn new(read_json_files: bool, write_json: bool) -> Result<Self, ClientInitError> {
        let client = Client::builder().build()?;
        Ok(Self {
            write_json,
            load_local_json: read_json_files,
            client,
            cache: RefCell::from(HashMap::new()),
        })
    }

    pub fn request(&self, request: CatalogRequest) -> Result<Rc<JsonValue>, RequestError> {
        if self.load_local_json {
            let mut file = File::open(format!("data/{:?}.json", request))?;
            let mut buf = String::new();
            file.read_to_string(&mut buf)?;
            let json = json::parse(buf.as_str())?;
            return Ok(Rc::new(json));
        }

        match self.cache.borrow_mut().entry(request) {
            Entry::Occupied(oe) => Ok(oe.get().clone()),
            Entry::Vacant(ve) => {
                let url = format!("{}{}", CATALOG_BASE_URL, request.file_name());

                let response = self.client.get(url).send()?;
                if !response.status().is_success() {
                    return Err(RequestError::InvalidResponse(request, response.status()));
                }

                let text = response.text()?;
                let json = json::parse(text.as_str())?;

                if self.write_json {
                    let _ = create_dir("data");
                    if let Ok(mut file) = File::create(format!("data/{:?}.json", request)) {
                        let _ = file.write_all(json.pretty(2).as_bytes());
                    }
                }

                let rc_json = Rc::new(json);
                ve.insert(rc_json.clone());
                Ok(rc_json)
            }
        }
    }

    pub fn refresh(&mut self) {
        self.cache.borrow_mut().clear();
    }
}

#[derive(Debug, PartialEq, Hash, Eq, Clone, Copy)]
pub enum CatalogRequest {
    Items,
    Champions,
}

impl CatalogRequest {
    fn file_name(&self) -> &'static str {
        match self {
            CatalogRequest::Items => "items.json",
            CatalogRequest::Champions => "champions.json",
        }
    }
}

#[derive(Debug)]
pub enum ClientInitError {
    ClientError(reqwest::Error),
}

impl fmt::Display for ClientInitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClientInitError::ClientError(err) => write!(f, "Client error: {}", err),
        }
    }
}

impl From<reqwest::Error> for ClientInitError {
    fn from(error: reqwest::Error) -> Self {
        Self::ClientError(error)
    }
}

#[derive(Debug)]
pub enum RequestError {
    ClientFailed(reqwest::Error),
    InvalidResponse(CatalogRequest, StatusCode),
    ParsingFailed(json::Error),
    LocalFileError(io::Error),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RequestError::ClientFailed(err) => write!(f, "Client error: {}", err),
            RequestError::InvalidResponse(req, status) => {
                write!(f, "The server returned HTTP {} for request {:?}", status, req)
            }
            RequestError::ParsingFailed(err) => write!(f, "Parsing error: {}", err),
            RequestError::LocalFileError(err) => write!(f, "Local file error: {}", err),
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(error: reqwest::Error) -> Self {
        RequestError::ClientFailed(error)
    }
}

impl From<json::Error> for RequestError {
    fn from(error: json::Error) -> Self {
        RequestError::ParsingFailed(error)
    }
}

impl From<io::Error> for RequestError {
    fn from(error: io::Error) -> Self {
        RequestError::LocalFileError(error)
    }
}
