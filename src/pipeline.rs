use serde::{Deserialize, Serialize};

use crate::morphology::MorphologyTable;

/// Minimal stand-in for the hosting pipeline context.
///
/// The formatter reads exactly one thing from its host: the morphology
/// table. Pipelines without one leave it unset and every token renders `_`
/// in the FEATS column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pipeline {
    morphology: Option<MorphologyTable>,
}

impl Pipeline {
    /// Creates a pipeline context with no morphology table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the morphology table.
    pub fn with_morphology(mut self, table: MorphologyTable) -> Self {
        self.morphology = Some(table);
        self
    }

    /// The morphology table, if the pipeline carries one.
    pub fn morphology(&self) -> Option<&MorphologyTable> {
        self.morphology.as_ref()
    }
}

#[cfg(test)]
mod pipeline_tests {
    use super::Pipeline;
    use crate::morphology::MorphologyTable;

    #[test]
    fn default_pipeline_has_no_morphology() {
        assert!(Pipeline::new().morphology().is_none());
    }

    #[test]
    fn with_morphology_exposes_the_table() {
        let pipeline =
            Pipeline::new().with_morphology(MorphologyTable::new().with_tag("NN", [("Number", "Sing")]));
        let table = pipeline.morphology().expect("table should be set");
        assert_eq!(table.feature_string("NN").as_deref(), Some("Number=Sing"));
    }
}
