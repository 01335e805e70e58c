//! Unit tests for core fixchain types.
mod common;
use fixchain::error::{ArtifactError, CatalogError, ConfigCodecError};
use fixchain::prelude::*;

#[test]
fn test_linkedin_field_display() {
    assert_eq!(format!("{}", LinkedInField::FirstName), "firstName");
    assert_eq!(format!("{}", LinkedInField::Company), "company");
    assert_eq!(format!("{}", LinkedInField::Location), "location");
}

#[test]
fn test_linkedin_field_parse() {
    for field in LinkedInField::ALL {
        assert_eq!(LinkedInField::parse(field.as_str()), Some(field));
    }
    assert_eq!(LinkedInField::parse("shoeSize"), None);
    assert_eq!(LinkedInField::parse(""), None);
    // Tag matching is exact; the PascalCase variant name is not a wire name.
    assert_eq!(LinkedInField::parse("FirstName"), None);
}

#[test]
fn test_fix_type_tags() {
    assert_eq!(FixChain::SendBlank.fix_type(), "sendBlank");
    assert_eq!(FixChain::SkipLeads.fix_type(), "skipLeads");
    assert_eq!(
        FixChain::InsertDefaultValue {
            value: "x".to_string()
        }
        .fix_type(),
        "insertDefaultValue"
    );
    assert_eq!(
        FixChain::FetchFromLinkedIn {
            source: LinkedInField::Title,
            fallback: None
        }
        .fix_type(),
        "fetchFromLinkedIn"
    );
    let covered = FixChain::AllLeadsPresent {
        fallback: CoveredFallback::SkipLeads,
    };
    assert_eq!(covered.fix_type(), "allLeadsPresent");
    assert!(covered.is_all_leads_present());
    assert!(!FixChain::SendBlank.is_all_leads_present());
}

#[test]
fn test_determine_fallback_mode_linkedin_short_circuits() {
    assert_eq!(
        determine_fallback_mode(VariableKind::LinkedIn, None),
        FallbackMode::LinkedIn
    );
    // Even a stored full-coverage marker cannot override the origin.
    let covered = FixChain::AllLeadsPresent {
        fallback: CoveredFallback::SendBlank,
    };
    assert_eq!(
        determine_fallback_mode(VariableKind::LinkedIn, Some(&covered)),
        FallbackMode::LinkedIn
    );
}

#[test]
fn test_determine_fallback_mode_covered_and_custom() {
    let covered = FixChain::AllLeadsPresent {
        fallback: CoveredFallback::SkipLeads,
    };
    assert_eq!(
        determine_fallback_mode(VariableKind::Csv, Some(&covered)),
        FallbackMode::AllLeadsPresent
    );
    assert_eq!(
        determine_fallback_mode(VariableKind::Api, Some(&covered)),
        FallbackMode::AllLeadsPresent
    );

    assert_eq!(
        determine_fallback_mode(VariableKind::Csv, None),
        FallbackMode::Custom
    );
    assert_eq!(
        determine_fallback_mode(VariableKind::Api, Some(&FixChain::SendBlank)),
        FallbackMode::Custom
    );
}

#[test]
fn test_error_display() {
    let err = ConfigCodecError::Parse("expected value at line 1".to_string());
    assert!(err.to_string().contains("csv-config JSON"));
    assert!(err.to_string().contains("line 1"));

    let artifact_err = ArtifactError::Io {
        path: "cache.bin".to_string(),
        message: "permission denied".to_string(),
    };
    assert!(artifact_err.to_string().contains("cache.bin"));
    assert!(artifact_err.to_string().contains("permission denied"));

    let catalog_err = CatalogError::DuplicateName("company".to_string());
    assert!(catalog_err.to_string().contains("company"));
}

#[test]
fn test_default_state_is_skip() {
    let state = FallbackState::default();
    assert_eq!(state.mode, StateMode::SkipLead);
    assert!(state.default_value.is_empty());
    assert!(state.linkedin_field.is_none());
    assert!(state.fallback_mode.is_none());
    assert!(state.fallback_default_value.is_empty());
}

#[test]
fn test_prelude_import_completeness() {
    // Verify that the prelude exports work correctly
    let _chain: Option<FixChain> = None;
    let _state: Option<FallbackState> = None;
    let _mode: Option<FallbackMode> = None;
    let _validation: Option<Validation> = None;
    let _catalog: Option<VariableCatalog> = None;
    let _store: Option<ConfigStore> = None;
    let _raw: Option<RawCsvConfig> = None;

    // Test Result alias
    let _result: Result<String> = Ok("test".to_string());
}
