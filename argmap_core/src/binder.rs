use crate::convert::{convert, Culture};
use crate::registry::{CommandConfig, OptionConfig};
use crate::resolver::UsageError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Convert the raw `values` to the option's declared type, and write the result into `model`.
pub(crate) fn bind<M>(
    model: &mut M,
    option: &OptionConfig<M>,
    values: &[String],
    culture: &Culture,
) -> Result<(), UsageError> {
    let value = convert(values, option.type_kind(), culture).map_err(|reason| {
        UsageError::InvalidOptionValue {
            name: option.long_name().to_string(),
            values: values.to_vec(),
            reason,
        }
    })?;

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Binding {values:?} to '{}' as {value:?}.", option.path());
    }

    option.assign(model, value);
    Ok(())
}

/// Write the option's configured default, else its type's zero value.
/// Types without a zero value are left untouched.
pub(crate) fn bind_default<M>(model: &mut M, option: &OptionConfig<M>) {
    if let Some(value) = option.default.as_ref().or(option.zero.as_ref()) {
        option.assign(model, value.clone());
    }
}

/// Instantiate the models of the command chain, outermost first.
pub(crate) fn enter<M>(model: &mut M, chain: &[&CommandConfig<M>]) {
    for command in chain {
        command.enter(model);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;
    use crate::path::PropertyPath;
    use url::Url;

    #[derive(Debug, PartialEq)]
    struct Model {
        count: u32,
        ratio: Option<f64>,
        items: Vec<i8>,
        target: Url,
        sub: Option<Sub>,
    }

    impl Default for Model {
        fn default() -> Self {
            Self {
                count: 7,
                ratio: Some(1.0),
                items: vec![1],
                target: Url::parse("http://localhost").unwrap(),
                sub: None,
            }
        }
    }

    #[derive(Default, Debug, PartialEq)]
    struct Sub {
        flag: bool,
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn bind_scalar() {
        let option = OptionConfig::new("count", PropertyPath::new("count", |m: &mut Model| &mut m.count));
        let mut model = Model::default();

        bind(&mut model, &option, &strings(&["1", "2"]), &Culture::invariant()).unwrap();

        assert_eq!(model.count, 2);
    }

    #[test]
    fn bind_culture() {
        let option = OptionConfig::new("ratio", PropertyPath::new("ratio", |m: &mut Model| &mut m.ratio));
        let culture = Culture::new("de-DE").decimal_separator(',').group_separator('.');
        let mut model = Model::default();

        bind(&mut model, &option, &strings(&["1.000,25"]), &culture).unwrap();
        assert_eq!(model.ratio, Some(1000.25));

        bind(&mut model, &option, &strings(&[""]), &culture).unwrap();
        assert_eq!(model.ratio, None);
    }

    #[test]
    fn bind_invalid() {
        let option = OptionConfig::new("items", PropertyPath::new("items", |m: &mut Model| &mut m.items));
        let mut model = Model::default();

        let error = bind(&mut model, &option, &strings(&["1", "x"]), &Culture::invariant()).unwrap_err();

        assert_matches!(error, UsageError::InvalidOptionValue { name, values, .. } => {
            assert_eq!(name, "items");
            assert_eq!(values, strings(&["1", "x"]));
        });
        assert_eq!(model.items, vec![1]);
    }

    #[test]
    fn defaults() {
        let mut count = OptionConfig::new("count", PropertyPath::new("count", |m: &mut Model| &mut m.count));
        count.default = Some(Value::U32(5));
        let ratio = OptionConfig::new("ratio", PropertyPath::new("ratio", |m: &mut Model| &mut m.ratio));
        let items = OptionConfig::new("items", PropertyPath::new("items", |m: &mut Model| &mut m.items));
        let target = OptionConfig::new("target", PropertyPath::new("target", |m: &mut Model| &mut m.target));
        let mut model = Model::default();

        for option in [&count, &ratio, &items, &target] {
            bind_default(&mut model, option);
        }

        assert_eq!(
            model,
            Model {
                count: 5,
                ratio: None,
                items: vec![],
                target: Url::parse("http://localhost").unwrap(),
                sub: None,
            }
        );
    }

    #[test]
    fn enter_chain() {
        let command = CommandConfig::new(
            "sub",
            PropertyPath::nested("sub", |m: &mut Model| &mut m.sub),
            vec![],
            vec![],
        );
        let mut model = Model::default();

        enter(&mut model, &[&command]);
        enter(&mut model, &[&command]);

        assert_eq!(model.sub, Some(Sub::default()));
    }
}
