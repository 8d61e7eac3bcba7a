use std::sync::Arc;

use news_client::NewsClient;

#[derive(Clone)]
pub struct ApiState {
    pub news_client: Arc<NewsClient>,
}

impl ApiState {
    pub fn new(news_client: Arc<NewsClient>) -> Self {
        Self { news_client }
    }
}
