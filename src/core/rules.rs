//! Ordered first-match-wins rule tables.

/// One named step of a precedence cascade.
pub struct Rule<I: ?Sized, O> {
    pub name: &'static str,
    pub apply: fn(&I) -> Option<O>,
}

/// Evaluates `rules` top to bottom and returns the first produced value
/// together with the name of the rule that produced it.
pub fn first_match<I: ?Sized, O>(rules: &[Rule<I, O>], input: &I) -> Option<(&'static str, O)> {
    rules
        .iter()
        .find_map(|rule| (rule.apply)(input).map(|out| (rule.name, out)))
}
