//! Sohu historical quote client.
//!
//! Issues the `hisHq` GET the provider's own quote page performs: JSONP
//! callback, browser-like headers, a referer scoped to the ticker's page,
//! and two cache-defeating tokens. The provider only checks the tokens'
//! presence, not their values.

use rand::Rng;

use super::provider::{QuoteError, QuoteProvider};
use crate::config::ClientConfig;
use crate::domain::QuoteRequest;

/// Blocking HTTP client for the provider's `hisHq` endpoint.
pub struct SohuHisHq {
    client: reqwest::blocking::Client,
    config: ClientConfig,
}

impl SohuHisHq {
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .expect("failed to build HTTP client");

        Self { client, config }
    }

    /// One GET attempt, no retry.
    fn try_fetch(&self, req: &QuoteRequest) -> Result<String, QuoteError> {
        let query = request_query(req);
        log::debug!(
            "GET {} code={} start={} end={} period={}",
            self.config.base_url,
            req.ticker(),
            req.start(),
            req.end(),
            req.interval().provider_code()
        );

        let response = self
            .client
            .get(&self.config.base_url)
            .header("accept", "*/*")
            .header("accept-language", "zh-CN,zh;q=0.9")
            .header("cache-control", "no-cache")
            .header("pragma", "no-cache")
            .header("referer", referer_for(req.symbol()))
            .header(
                "sec-ch-ua",
                "\"Not(A:Brand\";v=\"8\", \"Chromium\";v=\"144\", \"Google Chrome\";v=\"144\"",
            )
            .header("sec-ch-ua-mobile", "?0")
            .header("sec-ch-ua-platform", "\"Windows\"")
            .header("sec-fetch-dest", "script")
            .header("sec-fetch-mode", "no-cors")
            .header("sec-fetch-site", "same-origin")
            .query(&query)
            .send()
            .map_err(|e| QuoteError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Network(format!(
                "HTTP {status} for {}",
                req.ticker()
            )));
        }

        response.text().map_err(|e| QuoteError::Network(e.to_string()))
    }
}

impl Default for SohuHisHq {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteProvider for SohuHisHq {
    fn name(&self) -> &str {
        "sohu_hishq"
    }

    fn fetch_raw(&self, req: &QuoteRequest) -> Result<String, QuoteError> {
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                let delay = self.config.retry_base_delay() * 2u32.pow(attempt - 1);
                log::debug!("retry {attempt} for {} after {delay:?}", req.ticker());
                std::thread::sleep(delay);
            }

            match self.try_fetch(req) {
                Ok(text) => return Ok(text),
                Err(e) => {
                    log::warn!("fetch attempt {} failed: {e}", attempt + 1);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| QuoteError::Network("no fetch attempt was made".into())))
    }
}

/// Referer the provider expects: the ticker's own quote page.
fn referer_for(symbol: &str) -> String {
    format!("https://q.stock.sohu.com/cn/{symbol}/lshq.shtml")
}

/// Full query parameter set for one request.
///
/// `r` and the empty-valued parameter whose name is itself a random decimal
/// fraction defeat intermediary caches.
fn request_query(req: &QuoteRequest) -> Vec<(String, String)> {
    let mut rng = rand::thread_rng();
    vec![
        ("code".into(), req.ticker().into()),
        ("start".into(), req.start().into()),
        ("end".into(), req.end().into()),
        ("stat".into(), "1".into()),
        ("order".into(), "D".into()),
        ("period".into(), req.interval().provider_code().into()),
        ("callback".into(), "historySearchHandler".into()),
        ("rt".into(), "jsonp".into()),
        ("r".into(), format!("{:.16}", rng.gen::<f64>())),
        (format!("{:.17}", rng.gen::<f64>()), String::new()),
    ]
}
