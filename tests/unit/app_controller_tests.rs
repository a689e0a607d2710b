/*!
 * Tests for application controller functionality
 */

use anyhow::Result;
use std::path::PathBuf;

use tagasalin::app_config::{Config, Tone};
use tagasalin::app_controller::Controller;

use crate::common;

/// Test creating a controller with the default configuration
#[test]
fn test_new_with_default_config_shouldSucceed() -> Result<()> {
    let controller = Controller::new_for_test()?;
    assert!(!controller.config.translation.model.is_empty());
    assert_eq!(controller.config.tone, Tone::Informal);
    Ok(())
}

/// Test creating a controller with a specific configuration
#[test]
fn test_with_config_withValidConfig_shouldCreateController() -> Result<()> {
    let mut config = Config::default();
    config.tone = Tone::Formal;
    config.glossary = vec!["Blue Butterfly".to_string()];

    let controller = Controller::with_config(config)?;

    assert_eq!(controller.config.tone, Tone::Formal);
    assert_eq!(controller.config.glossary, vec!["Blue Butterfly"]);
    Ok(())
}

/// Test the initialization check
#[test]
fn test_is_initialized_withAndWithoutModel_shouldReflectConfig() -> Result<()> {
    let controller = Controller::new_for_test()?;
    assert!(controller.is_initialized());

    let mut config = Config::default();
    config.translation.model = String::new();
    let uninitialized = Controller::with_config(config)?;
    assert!(!uninitialized.is_initialized());

    Ok(())
}

/// Test that a missing input file is reported before anything runs
#[tokio::test]
async fn test_run_withMissingInputFile_shouldReturnError() -> Result<()> {
    let controller = Controller::new_for_test()?;

    let result = controller
        .run(Some(PathBuf::from("no_such_input_file.txt")), None)
        .await;

    let error = result.unwrap_err();
    assert!(error.to_string().contains("Input file does not exist"));
    Ok(())
}

/// Test that a whitespace-only input file is rejected without a backend call
#[tokio::test]
async fn test_run_withWhitespaceOnlyFile_shouldRejectEmptyInput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input_file =
        common::create_test_file(&temp_dir.path().to_path_buf(), "blank.txt", "  \n\n \t ")?;
    let controller = Controller::new_for_test()?;

    let result = controller.run(Some(input_file), None).await;

    let error = result.unwrap_err();
    assert!(error.to_string().contains("Input text is empty"));
    Ok(())
}
