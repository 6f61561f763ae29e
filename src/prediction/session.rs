//! The explicit context every form handler works on.

use super::features::FeatureList;
use super::form::{FormState, Payload};

/// A loaded feature list and the form built from it.
///
/// Rebuilt whenever the features are (re)loaded; handlers receive it
/// explicitly instead of capturing the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormSession {
    features: FeatureList,
    form: FormState,
}

impl FormSession {
    pub fn new(features: FeatureList) -> Self {
        let form = FormState::from_features(features.names());
        Self { features, form }
    }

    pub fn features(&self) -> &FeatureList {
        &self.features
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn payload(&self) -> Payload {
        self.form.payload()
    }

    pub fn fill_sample(&mut self) {
        self.form.fill_sample();
    }

    pub fn clear_inputs(&mut self) {
        self.form.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_builds_form_from_features() {
        let session = FormSession::new(FeatureList::fallback());
        assert_eq!(session.form().len(), session.features().len());
        let names: Vec<&str> = session.form().feature_names().collect();
        assert_eq!(names, session.features().names());
    }

    #[test]
    fn sample_then_clear_leaves_empty_inputs() {
        let mut session = FormSession::new(FeatureList::fallback());
        session.fill_sample();
        assert_eq!(session.payload().get("vma"), Some(Some(50.0)));
        session.clear_inputs();
        assert!(session.form().fields().iter().all(|f| f.value.is_empty()));
    }
}
