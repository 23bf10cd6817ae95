use actix_web::web;
use serde::Deserialize;

use crate::errors::LinkPagerHttpError;

/// `?page=N`, kept as a string so a bad value can be handled per route
#[derive(Deserialize, Debug, Default)]
pub struct PageNumQuery {
    pub page: Option<String>,
}

impl PageNumQuery {
    /// Read `page` from a raw query string, keeping the first value when the
    /// key repeats. Never fails.
    pub fn first_from(query_string: &str) -> PageNumQuery {
        let page = web::Query::<Vec<(String, String)>>::from_query(query_string)
            .ok()
            .and_then(|pairs| {
                pairs
                    .into_inner()
                    .into_iter()
                    .find(|(key, _)| key == "page")
                    .map(|(_, value)| value)
            });
        PageNumQuery { page }
    }

    /// The page number, falling back to 0 when missing or not an integer
    pub fn page_or_default(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|page| page.trim().parse::<i64>().ok())
            .unwrap_or(0)
    }

    /// The page number, 0 when missing, an error when not an integer
    pub fn page_strict(&self) -> Result<i64, LinkPagerHttpError> {
        match self.page.as_deref() {
            None => Ok(0),
            Some(page) => Ok(page.trim().parse::<i64>()?),
        }
    }
}
