use crate::client::{Client, Endpoint, RequestOptions, Result};
use crate::models::{ApplicationResponse, ApplicationsResponse, SearchForApplicationsParams};
use crate::query::encode_query;
use std::borrow::Cow;

/// `GET /v2/applications`
#[derive(Debug, Clone)]
pub struct SearchForApplications<'a> {
    client: &'a Client,
    options: RequestOptions,
    params: SearchForApplicationsParams,
}

impl<'a> SearchForApplications<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
            params: SearchForApplicationsParams::default(),
        }
    }
}

param_setters!(SearchForApplications {
    application_id: u64,
});

impl Endpoint for SearchForApplications<'_> {
    type Response = ApplicationsResponse;

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["v2", "applications"]
    }

    fn query(&self) -> Result<Option<String>> {
        Ok(encode_query(&self.params)?)
    }
}

/// `GET /v2/applications/{application-id}`
#[derive(Debug, Clone)]
pub struct LookupApplicationById<'a> {
    client: &'a Client,
    options: RequestOptions,
    application_id: u64,
}

impl<'a> LookupApplicationById<'a> {
    pub(crate) fn new(client: &'a Client, application_id: u64) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
            application_id,
        }
    }
}

impl Endpoint for LookupApplicationById<'_> {
    type Response = ApplicationResponse;

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["v2", "applications", self.application_id.to_string()]
    }
}

request_builder!(SearchForApplications, LookupApplicationById);

#[cfg(test)]
mod tests {
    use crate::indexer::tests::client;

    #[test]
    fn applications() {
        let client = client();
        let url = client.search_for_applications().application_id(9).url().unwrap();
        assert_eq!(url.path(), "/v2/applications");
        assert_eq!(url.query(), Some("application-id=9"));
        assert_eq!(
            client.lookup_application_by_id(9).url().unwrap().path(),
            "/v2/applications/9"
        );
    }
}
