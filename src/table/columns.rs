// src/table/columns.rs

//! Canonical column labels of the vacancy export, as produced by
//! [`crate::process::normalize`].

pub const JOB_TITLE_FR: &str = "JobTitleFR";
pub const JOB_TITLE_NL: &str = "JobTitleNL";
pub const JOB_ID: &str = "JobID";
pub const LANGUAGE_ROLE: &str = "LanguageRole";
pub const TYPE: &str = "Type";
pub const TYPE_1: &str = "Type1";
pub const TYPE_2: &str = "Type2";
pub const APPLY: &str = "Apply";
pub const PUBLICATION_DATE: &str = "PublicationDate";
pub const ADDRESS: &str = "Address";
pub const POSTAL_CODE: &str = "Postalcode";
pub const MUNICIPALITY: &str = "Municipality";
pub const GEO_SHAPE: &str = "GeoShape";
pub const GEO_PUNT: &str = "GeoPunt";
pub const STREET_NAME: &str = "StreetName";
pub const NUMBER: &str = "Number";
pub const STREET_SUFFIX: &str = "StreetSuffix";
pub const STREET_NAME_WITH_NUMBER: &str = "StreetNameWithNumber";
pub const PROVINCE: &str = "Province";

/// Columns the pipeline reads; checked right after normalization.
pub const REQUIRED: [&str; 3] = [MUNICIPALITY, JOB_TITLE_NL, PUBLICATION_DATE];
