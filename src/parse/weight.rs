use winnow::{
    ascii::{float, multispace0},
    combinator::delimited,
    error::{StrContext::Expected, StrContextValue::Description},
    PResult, Parser,
};

pub fn weight(input: &mut &str) -> PResult<f64> {
    delimited(
        multispace0,
        float.context(Expected(Description("a real number"))),
        multispace0,
    )
    .parse_next(input)
}
