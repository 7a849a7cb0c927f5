use crate::client::RestClient;

use super::ContentLabelService;

/// Content resources. Only the label sub-service is exposed.
#[derive(Debug, Clone, Copy)]
pub struct ContentService<'a> {
    client: &'a RestClient,
}

impl<'a> ContentService<'a> {
    pub(crate) fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    pub fn label(&self) -> ContentLabelService<'a> {
        ContentLabelService::new(self.client)
    }
}
