use crate::constant::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// How a token group key addresses its option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum MatchKind {
    ShortName,
    LongName,
}

/// One appearance of an option key, with the values that followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Occurrence {
    /// The index of the option token in the argument range.
    pub(crate) offset: usize,
    pub(crate) values: Vec<String>,
}

/// The values gathered for one option key, per occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TokenGroup {
    key: String,
    kind: MatchKind,
    occurrences: Vec<Occurrence>,
}

impl TokenGroup {
    /// The key, including its prefix (ex: `--verbose` or `-v`).
    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    /// The key without its prefix.
    pub(crate) fn name(&self) -> &str {
        match self.kind {
            MatchKind::LongName => &self.key[LONG_PREFIX.len()..],
            MatchKind::ShortName => &self.key[SHORT_PREFIX.len()..],
        }
    }

    pub(crate) fn kind(&self) -> MatchKind {
        self.kind
    }

    pub(crate) fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }

    /// All values across the occurrences, in order.
    pub(crate) fn values(&self) -> Vec<String> {
        self.occurrences
            .iter()
            .flat_map(|occurrence| occurrence.values.iter().cloned())
            .collect()
    }
}

/// The token groups of an argument range, in order of first appearance.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct TokenGroups {
    groups: Vec<TokenGroup>,
}

impl TokenGroups {
    fn push(&mut self, key: String, kind: MatchKind, offset: usize, values: Vec<String>) {
        let occurrence = Occurrence { offset, values };

        match self
            .groups
            .iter_mut()
            .find(|group| group.key == key && group.kind == kind)
        {
            Some(group) => group.occurrences.push(occurrence),
            None => self.groups.push(TokenGroup {
                key,
                kind,
                occurrences: vec![occurrence],
            }),
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &TokenGroup> {
        self.groups.iter()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.groups.len()
    }
}

/// Whether `token` addresses an option (as opposed to being a value, or the positional separator).
///
/// Ex:
/// * `--name`, `--name=value`, `-n`, `-abc`, `-n:value` are options.
/// * `value`, `--`, `-`, `-1`, `-1.5`, `-.5`, `"--quoted"` are not.
pub(crate) fn is_option_token(token: &str) -> bool {
    if token == POSITIONAL_SEPARATOR || is_quoted(token) {
        false
    } else if let Some(rest) = token.strip_prefix(LONG_PREFIX) {
        !rest.is_empty()
    } else if let Some(rest) = token.strip_prefix(SHORT_PREFIX) {
        !rest.is_empty() && !is_numeric(rest)
    } else {
        false
    }
}

fn is_quoted(token: &str) -> bool {
    QUOTES.iter().any(|quote| {
        token.len() >= 2 && token.starts_with(*quote) && token.ends_with(*quote)
    })
}

fn is_numeric(token: &str) -> bool {
    match token.chars().next() {
        Some(c) if c.is_ascii_digit() => true,
        Some(_) => {
            token.chars().any(|c| c.is_ascii_digit())
                && token
                    .chars()
                    .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        }
        None => false,
    }
}

fn split_assignment(token: &str) -> (&str, Option<&str>) {
    match token.find(ASSIGNMENT_OPERATORS) {
        Some(index) => (&token[..index], Some(&token[index + 1..])),
        None => (token, None),
    }
}

/// Group the option tokens of `args[start..]` with their values.
///
/// Scanning ends at the positional separator `--`.
/// Values before the first option token belong to no group.
pub(crate) fn tokenize(args: &[String], start: usize) -> TokenGroups {
    let mut groups = TokenGroups::default();
    let mut index = start;

    while index < args.len() {
        let offset = index;
        let token = &args[index];
        index += 1;

        if token == POSITIONAL_SEPARATOR {
            break;
        }

        if !is_option_token(token) {
            continue;
        }

        let (keys, embedded) = if let Some(rest) = token.strip_prefix(LONG_PREFIX) {
            let (name, embedded) = split_assignment(rest);
            (vec![(format!("{LONG_PREFIX}{name}"), MatchKind::LongName)], embedded)
        } else {
            let rest = &token[SHORT_PREFIX.len()..];
            let (name, embedded) = split_assignment(rest);

            if embedded.is_none() && name.chars().count() > 1 {
                // Stacked, ex: `-xyz`.
                let keys: Vec<_> = name
                    .chars()
                    .map(|c| (format!("{SHORT_PREFIX}{c}"), MatchKind::ShortName))
                    .collect();
                (keys, None)
            } else {
                (vec![(format!("{SHORT_PREFIX}{name}"), MatchKind::ShortName)], embedded)
            }
        };

        let mut values = Vec::default();

        match embedded {
            Some(value) => values.push(value.to_string()),
            None => {
                if let Some(next) = args.get(index) {
                    if let Some(value) = next.strip_prefix(ASSIGNMENT_OPERATORS) {
                        index += 1;

                        if value.is_empty() {
                            if let Some(value) = args.get(index) {
                                values.push(value.clone());
                                index += 1;
                            }
                        } else {
                            values.push(value.to_string());
                        }
                    }
                }
            }
        }

        while let Some(next) = args.get(index) {
            if next == POSITIONAL_SEPARATOR || is_option_token(next) {
                break;
            }

            values.push(next.clone());
            index += 1;
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Token '{token}' groups {keys:?} with values {values:?}.");
        }

        for (key, kind) in keys {
            groups.push(key, kind, offset, values.clone());
        }
    }

    groups
}

/// The positional values of `args`: the leading values before the first option token,
/// then every token after the positional separator `--`.
pub(crate) fn positional_window(args: &[String]) -> Vec<String> {
    let mut window: Vec<String> = args
        .iter()
        .take_while(|token| *token != POSITIONAL_SEPARATOR && !is_option_token(token))
        .cloned()
        .collect();

    if let Some(separator) = args.iter().position(|token| token == POSITIONAL_SEPARATOR) {
        window.extend(args[separator + 1..].iter().cloned());
    }

    window
}

/// The tokens before the positional separator `--`.
pub(crate) fn named_range(args: &[String]) -> &[String] {
    match args.iter().position(|token| token == POSITIONAL_SEPARATOR) {
        Some(separator) => &args[..separator],
        None => args,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    type Shape = Vec<(String, MatchKind, Vec<Vec<String>>)>;

    fn shape(groups: TokenGroups) -> Shape {
        groups
            .iter()
            .map(|group| {
                (
                    group.key().to_string(),
                    group.kind(),
                    group
                        .occurrences()
                        .iter()
                        .map(|occurrence| occurrence.values.clone())
                        .collect(),
                )
            })
            .collect()
    }

    fn groups(expected: Vec<(&str, MatchKind, Vec<Vec<&str>>)>) -> Shape {
        expected
            .into_iter()
            .map(|(key, kind, occurrences)| {
                (
                    key.to_string(),
                    kind,
                    occurrences.iter().map(|values| strings(values)).collect(),
                )
            })
            .collect()
    }

    #[rstest]
    #[case("--name", true)]
    #[case("--name=value", true)]
    #[case("--n", true)]
    #[case("-n", true)]
    #[case("-abc", true)]
    #[case("-n:value", true)]
    #[case("--", false)]
    #[case("-", false)]
    #[case("value", false)]
    #[case("-1", false)]
    #[case("-1.5", false)]
    #[case("-1,5", false)]
    #[case("-.5", false)]
    #[case("-1a", false)]
    #[case("\"--quoted\"", false)]
    #[case("'-q'", false)]
    fn option_token(#[case] token: &str, #[case] expected: bool) {
        assert_eq!(is_option_token(token), expected);
    }

    #[test]
    fn tokenize_empty() {
        let result = tokenize(&[] as &[String], 0);
        assert_eq!(result, TokenGroups::default());
        assert_eq!(result.len(), 0);
    }

    #[rstest]
    #[case(vec!["--flag"], vec![("--flag", MatchKind::LongName, vec![vec![]])])]
    #[case(vec!["-f"], vec![("-f", MatchKind::ShortName, vec![vec![]])])]
    #[case(vec!["--opt", "a"], vec![("--opt", MatchKind::LongName, vec![vec!["a"]])])]
    #[case(vec!["--opt", "a", "b"], vec![("--opt", MatchKind::LongName, vec![vec!["a", "b"]])])]
    #[case(vec!["-o", "-1"], vec![("-o", MatchKind::ShortName, vec![vec!["-1"]])])]
    #[case(vec!["-o", "-1.5", "-2"], vec![("-o", MatchKind::ShortName, vec![vec!["-1.5", "-2"]])])]
    #[case(vec!["--a", "1", "--b", "2"], vec![
        ("--a", MatchKind::LongName, vec![vec!["1"]]),
        ("--b", MatchKind::LongName, vec![vec!["2"]]),
    ])]
    #[case(vec!["--a", "--b"], vec![
        ("--a", MatchKind::LongName, vec![vec![]]),
        ("--b", MatchKind::LongName, vec![vec![]]),
    ])]
    fn tokenize_basic(
        #[case] tokens: Vec<&str>,
        #[case] expected: Vec<(&str, MatchKind, Vec<Vec<&str>>)>,
    ) {
        assert_eq!(shape(tokenize(&strings(&tokens), 0)), groups(expected));
    }

    #[rstest]
    #[case(vec!["--opt=a"], "--opt", MatchKind::LongName, vec!["a"])]
    #[case(vec!["--opt:a"], "--opt", MatchKind::LongName, vec!["a"])]
    #[case(vec!["--opt="], "--opt", MatchKind::LongName, vec![""])]
    #[case(vec!["--opt=a=b"], "--opt", MatchKind::LongName, vec!["a=b"])]
    #[case(vec!["--uri=http://host:80"], "--uri", MatchKind::LongName, vec!["http://host:80"])]
    #[case(vec!["-o=a"], "-o", MatchKind::ShortName, vec!["a"])]
    #[case(vec!["-o:a"], "-o", MatchKind::ShortName, vec!["a"])]
    #[case(vec!["--opt", "=", "a"], "--opt", MatchKind::LongName, vec!["a"])]
    #[case(vec!["--opt", ":", "a"], "--opt", MatchKind::LongName, vec!["a"])]
    #[case(vec!["--opt", "=a"], "--opt", MatchKind::LongName, vec!["a"])]
    #[case(vec!["-o", ":a", "b"], "-o", MatchKind::ShortName, vec!["a", "b"])]
    #[case(vec!["--opt", "="], "--opt", MatchKind::LongName, vec![])]
    #[case(vec!["--opt=a", "b"], "--opt", MatchKind::LongName, vec!["a", "b"])]
    fn tokenize_assignment(
        #[case] tokens: Vec<&str>,
        #[case] key: &str,
        #[case] kind: MatchKind,
        #[case] values: Vec<&str>,
    ) {
        assert_eq!(
            shape(tokenize(&strings(&tokens), 0)),
            groups(vec![(key, kind, vec![values])])
        );
    }

    #[rstest]
    #[case(vec!["-xyz"], vec![])]
    #[case(vec!["-xyz", "1"], vec!["1"])]
    #[case(vec!["-xyz", "1", "2"], vec!["1", "2"])]
    fn tokenize_stacked(#[case] tokens: Vec<&str>, #[case] values: Vec<&str>) {
        assert_eq!(
            shape(tokenize(&strings(&tokens), 0)),
            groups(vec![
                ("-x", MatchKind::ShortName, vec![values.clone()]),
                ("-y", MatchKind::ShortName, vec![values.clone()]),
                ("-z", MatchKind::ShortName, vec![values]),
            ])
        );
    }

    #[test]
    fn tokenize_stacked_assignment() {
        // With an assignment, the whole name is one (unknown) short key.
        assert_eq!(
            shape(tokenize(&strings(&["-xy=1"]), 0)),
            groups(vec![("-xy", MatchKind::ShortName, vec![vec!["1"]])])
        );
    }

    #[rstest]
    #[case(vec!["--opt", "\"--not-an-option\""], vec!["\"--not-an-option\""])]
    #[case(vec!["--opt", "'-x y'"], vec!["'-x y'"])]
    #[case(vec!["--opt", "\"a\"", "b"], vec!["\"a\"", "b"])]
    fn tokenize_quoted(#[case] tokens: Vec<&str>, #[case] values: Vec<&str>) {
        assert_eq!(
            shape(tokenize(&strings(&tokens), 0)),
            groups(vec![("--opt", MatchKind::LongName, vec![values])])
        );
    }

    #[test]
    fn tokenize_repeat() {
        let result = tokenize(&strings(&["--opt", "1", "-o", "2", "--opt", "3", "4"]), 0);
        let group = result.iter().next().unwrap().clone();

        assert_eq!(
            shape(result),
            groups(vec![
                ("--opt", MatchKind::LongName, vec![vec!["1"], vec!["3", "4"]]),
                ("-o", MatchKind::ShortName, vec![vec!["2"]]),
            ])
        );
        assert_eq!(group.values(), strings(&["1", "3", "4"]));
        assert_eq!(group.name(), "opt");
        assert_eq!(group.key(), "--opt");
        assert_eq!(group.kind(), MatchKind::LongName);
        assert_eq!(
            group
                .occurrences()
                .iter()
                .map(|occurrence| occurrence.offset)
                .collect::<Vec<_>>(),
            vec![0, 4]
        );
    }

    #[rstest]
    #[case(vec!["a", "b", "--opt", "1"], vec![("--opt", MatchKind::LongName, vec![vec!["1"]])])]
    #[case(vec!["--opt", "1", "--", "--other", "2"], vec![("--opt", MatchKind::LongName, vec![vec!["1"]])])]
    #[case(vec!["--", "--opt", "1"], vec![])]
    fn tokenize_skips_positional(
        #[case] tokens: Vec<&str>,
        #[case] expected: Vec<(&str, MatchKind, Vec<Vec<&str>>)>,
    ) {
        assert_eq!(shape(tokenize(&strings(&tokens), 0)), groups(expected));
    }

    #[test]
    fn tokenize_start() {
        assert_eq!(
            shape(tokenize(&strings(&["--skipped", "x", "--opt", "1"]), 2)),
            groups(vec![("--opt", MatchKind::LongName, vec![vec!["1"]])])
        );
    }

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec!["a", "b"], vec!["a", "b"])]
    #[case(vec!["a", "-1", "--opt", "1"], vec!["a", "-1"])]
    #[case(vec!["--opt", "1"], vec![])]
    #[case(vec!["a", "--", "--x", "b"], vec!["a", "--x", "b"])]
    #[case(vec!["--opt", "1", "--", "b"], vec!["b"])]
    #[case(vec!["--", "--"], vec!["--"])]
    fn window(#[case] tokens: Vec<&str>, #[case] expected: Vec<&str>) {
        assert_eq!(positional_window(&strings(&tokens)), strings(&expected));
    }

    #[rstest]
    #[case(vec!["a", "--opt"], vec!["a", "--opt"])]
    #[case(vec!["a", "--", "-h"], vec!["a"])]
    fn named(#[case] tokens: Vec<&str>, #[case] expected: Vec<&str>) {
        assert_eq!(named_range(&strings(&tokens)), strings(&expected).as_slice());
    }
}
