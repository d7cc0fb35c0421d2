//! Linked-data graph synthesis for Pleiades gazetteer places.
//!
//! Given a [`Place`] and four collaborators (records, vocabulary, grid
//! lookup, person directory), [`PlaceGrapher`] produces one deterministic
//! RDF graph per place:
//!
//! - preferred/alternate labels selected from rated Names
//! - a representative point or atlas-grid extents from rated Locations
//! - normalized citation relations
//! - creator/contributor attribution
//!
//! Recoverable problems (bad grid references, unknown grid cells, locations
//! whose geometry cannot be wrapped) never abort the place; they are logged
//! through `tracing` and listed in the returned [`ExportReport`].
//!
//! # Example
//!
//! ```ignore
//! let grapher = PlaceGrapher::new(&config, &records, &vocabulary, &grids, &people);
//! let export = grapher.place(&place)?;
//! print!("{}", export.graph.to_ntriples());
//! ```

pub mod attribution;
pub mod builder;
pub mod config;
pub mod coverage;
pub mod error;
pub mod geometry;
pub mod labels;
pub mod model;
pub mod provider;
pub mod references;

pub use builder::{PlaceExport, PlaceGrapher};
pub use config::{load_config, CollapseInto, ConfigError, CreditAlias, ExportConfig};
pub use error::{Diagnostic, ExportError, ExportReport, ItemError, ProviderError, Result};
pub use model::{
    Attestation, Citation, Location, LocationPrecision, Metadata, Name, Place, Rated, ReviewState,
    TimeSpan,
};
pub use provider::{Member, PersonDirectory, RecordProvider, VocabularyProvider, VocabularyTerm};
