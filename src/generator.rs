use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::Error;
use crate::metrics::{INVALID_JSON, PROVIDER_FAILURES, SCHEMA_MISMATCHES};
use crate::models::{CardType, GenerateRequest, inspect_items};
use crate::prompts::PromptPair;
use crate::provider::ChatProvider;

/// Parses a model reply as JSON after trimming surrounding whitespace.
///
/// Any syntactically valid JSON is accepted as-is, whatever its shape.
pub fn parse_response(raw: &str) -> Result<Value, Error> {
    serde_json::from_str(raw.trim()).map_err(Error::InvalidJson)
}

/// Runs one request through validate, invoke and parse. Each stage either
/// hands its output to the next or ends the request; nothing is retried.
#[derive(Clone)]
pub struct Generator {
    provider: Arc<dyn ChatProvider>,
}

impl Generator {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }

    pub async fn generate(&self, req: &GenerateRequest) -> Result<Value, Error> {
        // validating
        let card_type: CardType = req.card_type.parse()?;
        let prompts = PromptPair::for_request(card_type, req);

        info!(
            %card_type,
            language = %req.language,
            count = req.count.get(),
            "Generating cards"
        );

        // invoking
        let raw = self
            .provider
            .chat(prompts.system_prompt, &prompts.user_prompt)
            .await
            .inspect_err(|e| {
                PROVIDER_FAILURES.inc();
                warn!(error = %e, "Provider call failed");
            })?;

        // parsing
        let result = parse_response(&raw).inspect_err(|_| {
            INVALID_JSON.inc();
            warn!(reply_len = raw.len(), "Provider reply was not valid JSON");
        })?;

        let report = inspect_items(card_type, &result);
        if report.is_array && report.mismatched() == 0 {
            debug!(items = report.items, "Reply matches requested shape");
        } else {
            SCHEMA_MISMATCHES.inc_by(report.mismatched() as f64);
            warn!(
                is_array = report.is_array,
                items = report.items,
                well_formed = report.well_formed,
                "Reply does not match requested shape, passing through"
            );
        }

        Ok(result)
    }
}
