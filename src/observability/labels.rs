use metrics::{IntoLabels, Label, SharedString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Metric labels attached by a checker, configured as a flat `{"key": "value"}` object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Labels(Vec<Label>);

impl Labels {
    pub fn new(
        labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Self {
        Labels(labels.iter().map(Label::from).collect())
    }

    pub fn empty() -> Self {
        Labels(vec![])
    }

    /// Copy of these labels with one more key-value pair appended
    pub fn with_label(
        &self,
        key: impl Into<SharedString>,
        value: impl Into<SharedString>,
    ) -> Labels {
        let mut labels = self.0.clone();
        labels.push(Label::new(key, value));
        Labels(labels)
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}

impl Serialize for Labels {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|label| (label.key(), label.value())))
    }
}

impl<'de> Deserialize<'de> for Labels {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let labels = BTreeMap::<String, String>::deserialize(deserializer)?;
        Ok(Labels(
            labels
                .into_iter()
                .map(|(key, value)| Label::new(key, value))
                .collect(),
        ))
    }
}

#[cfg(test)]
mod test {
    use crate::observability::labels::Labels;
    use metrics::{IntoLabels, Label};

    #[test]
    fn with_label_leaves_the_original_untouched() {
        let labels = Labels::new(&[("form", "signup")]);
        let extended = labels.with_label("validator", "iin_checksum");

        assert_eq!(
            extended.into_labels(),
            vec![
                Label::new("form", "signup"),
                Label::new("validator", "iin_checksum")
            ]
        );
        assert_eq!(labels.into_labels(), vec![Label::new("form", "signup")]);
    }

    #[test]
    fn test_labels_from_json() {
        let labels: Labels = serde_json::from_str(r#"{"form": "signup", "field": "iin"}"#).unwrap();
        let label_list = labels.into_labels();
        assert_eq!(label_list.len(), 2);
        assert!(label_list.contains(&Label::new("form", "signup")));
        assert!(label_list.contains(&Label::new("field", "iin")));
    }

    #[test]
    fn test_labels_to_json() {
        let labels = Labels::new(&[("form", "signup")]);
        assert_eq!(
            serde_json::to_string(&labels).unwrap(),
            r#"{"form":"signup"}"#
        );
        assert_eq!(serde_json::to_string(&Labels::empty()).unwrap(), "{}");
    }
}
