//! Fast catchup control. Catchpoints look like `<round>#<base32 label>`; the
//! `#` is percent-encoded in the request path.

use crate::client::{Client, Endpoint, RequestOptions};
use crate::models::{CatchpointAbortResponse, CatchpointStartResponse};
use reqwest::Method;
use std::borrow::Cow;

/// `POST /v2/catchup/{catchpoint}`
#[derive(Debug, Clone)]
pub struct StartCatchup<'a> {
    client: &'a Client,
    options: RequestOptions,
    catchpoint: String,
}

impl<'a> StartCatchup<'a> {
    pub(crate) fn new(client: &'a Client, catchpoint: String) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
            catchpoint,
        }
    }
}

impl Endpoint for StartCatchup<'_> {
    type Response = CatchpointStartResponse;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["v2", "catchup", &self.catchpoint]
    }
}

/// `DELETE /v2/catchup/{catchpoint}`
#[derive(Debug, Clone)]
pub struct AbortCatchup<'a> {
    client: &'a Client,
    options: RequestOptions,
    catchpoint: String,
}

impl<'a> AbortCatchup<'a> {
    pub(crate) fn new(client: &'a Client, catchpoint: String) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
            catchpoint,
        }
    }
}

impl Endpoint for AbortCatchup<'_> {
    type Response = CatchpointAbortResponse;

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["v2", "catchup", &self.catchpoint]
    }
}

request_builder!(StartCatchup, AbortCatchup);
