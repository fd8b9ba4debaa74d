use anyhow::{Context, Result};
use orbitify_core::host::HostEnvironment;
use reqwest::Url;
use std::sync::Mutex;

/// OAuth callback URL standing in for the browser page location.
pub struct CallbackUrl {
    params: Vec<(String, String)>,
    visible: Mutex<Url>,
}

impl CallbackUrl {
    pub fn parse(raw: &str) -> Result<Self> {
        let url = Url::parse(raw).with_context(|| format!("Invalid callback URL '{raw}'"))?;
        let params = url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        Ok(Self {
            params,
            visible: Mutex::new(url),
        })
    }

    /// URL as it would now appear in the address bar.
    pub fn visible_url(&self) -> String {
        match self.visible.lock() {
            Ok(url) => url.to_string(),
            Err(poisoned) => poisoned.into_inner().to_string(),
        }
    }
}

impl HostEnvironment for CallbackUrl {
    fn query_param(&self, name: &str) -> Option<String> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    fn strip_query_params(&self) {
        if let Ok(mut url) = self.visible.lock() {
            url.set_query(None);
        }
    }
}
