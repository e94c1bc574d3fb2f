//! Classify command: report which login method each input maps to.

use color_eyre::eyre::{eyre, Result};

use crate::config::SessionConfig;
use crate::credentials::{region, CredentialClassifier};

/// Render one output line per input.
///
/// Recognized inputs print as `method:value`; the rest as `none:<input>`.
pub fn classify_lines(classifier: &CredentialClassifier, inputs: &[String]) -> Vec<String> {
    inputs
        .iter()
        .map(|input| match classifier.classify(input) {
            Some(candidate) => candidate.to_string(),
            None => format!("none:{}", input),
        })
        .collect()
}

/// Pick the classifier: an explicit `--region` wins over the config.
pub fn classifier_for(config: &SessionConfig, region_code: Option<&str>) -> Result<CredentialClassifier> {
    match region_code {
        Some(code) => region(code)
            .map(|r| CredentialClassifier::new(Some(r)))
            .ok_or_else(|| eyre!("Unknown region '{}'", code)),
        None => Ok(config.classifier()),
    }
}

pub fn handle_classify_command(
    config: &SessionConfig,
    region_code: Option<&str>,
    inputs: &[String],
) -> Result<()> {
    if inputs.is_empty() {
        return Err(eyre!("Usage: parley classify [--region CODE] <input>..."));
    }
    let classifier = classifier_for(config, region_code)?;
    for line in classify_lines(&classifier, inputs) {
        println!("{}", line);
    }
    Ok(())
}
