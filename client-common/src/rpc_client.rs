use common::api::{self, Endpoint};
use tracing::warn;

/// Thin JSON poster for the auth/chat service. One attempt per call, no
/// retry or timeout policy: whatever goes wrong on the wire is collapsed
/// into [`api::Error::ServiceUnavailable`] and the user is asked to retry.
#[derive(Clone)]
pub struct RpcClient {
    reqwest_client: reqwest::Client,
    url: String, // maybe use Url type directly
}

impl RpcClient {
    pub fn new(url: &str) -> Self {
        Self {
            reqwest_client: reqwest::Client::new(),
            url: url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.url, path)
    }

    pub async fn call<T: Endpoint>(&self, req: T) -> api::Result<T::Resp> {
        self.post(self.reqwest_client.post(self.endpoint_url(T::PATH)), req).await
    }

    /// Same as [`call`](Self::call) with the session token attached as a
    /// bearer credential.
    pub async fn call_authed<T: Endpoint>(&self, token: &str, req: T) -> api::Result<T::Resp> {
        let builder = self
            .reqwest_client
            .post(self.endpoint_url(T::PATH))
            .bearer_auth(token);
        self.post(builder, req).await
    }

    async fn post<T: Endpoint>(
        &self,
        builder: reqwest::RequestBuilder,
        req: T,
    ) -> api::Result<T::Resp> {
        let res = match builder.json(&req).send().await {
            Ok(res) => res,
            Err(e) => {
                warn!("request to {} failed: {:#}", T::PATH, e);
                return Err(api::Error::ServiceUnavailable);
            }
        };

        match res.json::<T::Resp>().await {
            Ok(resp) => Ok(resp),
            Err(e) => {
                warn!("malformed response from {}: {:#}", T::PATH, e);
                Err(api::Error::ServiceUnavailable)
            }
        }
    }
}
