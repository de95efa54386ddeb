use crate::api::InstagramClient;

#[derive(Debug)]
pub struct AppContext {
    pub client: InstagramClient,
}

impl AppContext {
    pub fn bootstrap() -> Self {
        Self {
            client: InstagramClient::new(),
        }
    }
}
