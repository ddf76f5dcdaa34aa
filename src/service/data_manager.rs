use std::fmt;

use once_cell::sync::OnceCell;

use crate::model::{champion::Champion, item::Item};

use super::catalog::{
    client::{CatalogClient, CatalogRequest, ClientInitError, RequestError},
    parsing::{champion::parse_champions, item::parse_items, ParsingError},
};

/// Caching facade over the catalog client. Both catalogs are fetched at most
/// once per session and held in memory; `refresh` drops everything.
pub struct DataManager {
    client: CatalogClient,
    items_cache: OnceCell<Vec<Item>>,
    champions_cache: OnceCell<Vec<Champion>>,
}

impl DataManager {
    pub fn new(read_json_files: bool, write_json: bool) -> Result<Self, DataManagerInitError> {
        let client = CatalogClient::new(read_json_files, write_json)?;

        Ok(Self {
            client,
            items_cache: OnceCell::new(),
            champions_cache: OnceCell::new(),
        })
    }

    pub fn get_items(&self) -> DataRetrievalResult<&Vec<Item>> {
        self.items_cache.get_or_try_init(|| {
            let items_json = self.client.request(CatalogRequest::Items)?;
            let items = parse_items(&items_json)?;
            Ok(items)
        })
    }

    pub fn get_champions(&self) -> DataRetrievalResult<&Vec<Champion>> {
        self.champions_cache.get_or_try_init(|| {
            let champs_json = self.client.request(CatalogRequest::Champions)?;
            let champions = parse_champions(&champs_json)?;
            Ok(champions)
        })
    }

    pub fn refresh(&mut self) {
        self.client.refresh();
        self.items_cache = OnceCell::new();
        self.champions_cache = OnceCell::new();
    }
}

pub type DataRetrievalResult<T> = Result<T, DataRetrievalError>;

#[derive(Debug)]
pub enum DataManagerInitError {
    ClientFailed(ClientInitError),
}

impl fmt::Display for DataManagerInitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataManagerInitError::ClientFailed(err) => write!(f, "Client init failed: {}", err),
        }
    }
}

impl From<ClientInitError> for DataManagerInitError {
    fn from(error: ClientInitError) -> Self {
        Self::ClientFailed(error)
    }
}

#[derive(Debug)]
pub enum DataRetrievalError {
    ClientFailed(RequestError),
    ParsingFailed(ParsingError),
}

impl fmt::Display for DataRetrievalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataRetrievalError::ClientFailed(err) => write!(f, "Request failed: {}", err),
            DataRetrievalError::ParsingFailed(err) => write!(f, "Catalog parsing failed: {}", err),
        }
    }
}

impl From<RequestError> for DataRetrievalError {
    fn from(error: RequestError) -> Self {
        Self::ClientFailed(error)
    }
}

impl From<ParsingError> for DataRetrievalError {
    fn from(error: ParsingError) -> Self {
        Self::ParsingFailed(error)
    }
}
