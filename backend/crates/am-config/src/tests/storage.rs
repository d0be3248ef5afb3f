use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, StorageBackend};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Storage
// =========================================================================

#[test]
#[serial]
fn given_empty_key_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _key = EnvGuard::set("AM_STORAGE_KEY", "");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_key_with_path_separator_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _key = EnvGuard::set("AM_STORAGE_KEY", "../escape");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_absolute_storage_dir_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _dir = EnvGuard::set("AM_STORAGE_DIR", "/var/lib/am");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_memory_backend_with_absolute_dir_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _backend = EnvGuard::set("AM_STORAGE_BACKEND", "memory");
    let _dir = EnvGuard::set("AM_STORAGE_DIR", "/ignored");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
fn test_storage_backend_from_str() {
    assert_that!(StorageBackend::from_str("file").unwrap(), eq(StorageBackend::File));
    assert_that!(
        StorageBackend::from_str("memory").unwrap(),
        eq(StorageBackend::Memory)
    );
    assert!(StorageBackend::from_str("s3").is_err());
}
