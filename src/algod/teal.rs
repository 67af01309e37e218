use crate::client::{Body, Client, Endpoint, RequestOptions, Result};
use crate::models::{CompileResponse, DryrunRequest, DryrunResponse};
use reqwest::Method;
use std::borrow::Cow;

/// `POST /v2/teal/compile`
#[derive(Debug, Clone)]
pub struct TealCompile<'a> {
    client: &'a Client,
    options: RequestOptions,
    source: String,
}

impl<'a> TealCompile<'a> {
    pub(crate) fn new(client: &'a Client, source: String) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
            source,
        }
    }
}

impl Endpoint for TealCompile<'_> {
    type Response = CompileResponse;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["v2", "teal", "compile"]
    }

    fn body(&self) -> Result<Option<Body>> {
        Ok(Some(Body::Text(self.source.clone())))
    }
}

/// `POST /v2/teal/dryrun`
#[derive(Debug, Clone)]
pub struct TealDryrun<'a> {
    client: &'a Client,
    options: RequestOptions,
    request: DryrunRequest,
}

impl<'a> TealDryrun<'a> {
    pub(crate) fn new(client: &'a Client, request: DryrunRequest) -> Self {
        Self {
            client,
            options: RequestOptions::default(),
            request,
        }
    }
}

impl Endpoint for TealDryrun<'_> {
    type Response = DryrunResponse;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> Vec<Cow<'_, str>> {
        path!["v2", "teal", "dryrun"]
    }

    fn body(&self) -> Result<Option<Body>> {
        Ok(Some(Body::Json(serde_json::to_vec(&self.request)?)))
    }
}

request_builder!(TealCompile, TealDryrun);

#[cfg(test)]
mod tests {
    use crate::algod::tests::client;
    use crate::client::{Body, Endpoint};
    use crate::models::{DryrunRequest, DryrunSource};

    #[test]
    fn compile_sends_source_as_text() {
        let client = client();
        let compile = client.teal_compile("int 1");
        assert_eq!(compile.url().unwrap().path(), "/v2/teal/compile");
        assert_eq!(
            compile.body().unwrap(),
            Some(Body::Text("int 1".to_string()))
        );
    }

    #[test]
    fn dryrun_sends_json() {
        let client = client();
        let request = DryrunRequest {
            round: Some(10),
            sources: vec![DryrunSource {
                field_name: "approv".to_string(),
                source: "int 1".to_string(),
                app_index: 1,
                ..Default::default()
            }],
            ..Default::default()
        };
        let dryrun = client.teal_dryrun(request);
        let Some(Body::Json(bytes)) = dryrun.body().unwrap() else {
            panic!("expected a JSON body");
        };
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["round"], 10);
        assert_eq!(value["sources"][0]["app-index"], 1);
    }
}
