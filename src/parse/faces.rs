use winnow::{
    ascii::{dec_int, digit0, multispace0},
    combinator::{alt, cut_err, delimited, preceded, separated},
    error::{
        StrContext::{Expected, Label},
        StrContextValue::{CharLiteral, Description},
    },
    token::take_while,
    PResult, Parser,
};

/// `d{sides}`, `1, 2, 3` or `[1, 2, 3]`
pub fn number_faces(input: &mut &str) -> PResult<Vec<i64>> {
    delimited(
        multispace0,
        alt((
            dice_sides,
            bracketed_number_list,
            number_list.context(Label("face list")),
        )),
        multispace0,
    )
    .parse_next(input)
}

/// `heads, tails` or `[heads, tails]`
pub fn text_faces(input: &mut &str) -> PResult<Vec<String>> {
    delimited(
        multispace0,
        alt((
            delimited('[', cut_err(word_list), cut_err(']'.context(Expected(CharLiteral(']'))))),
            word_list.context(Label("face list")),
        )),
        multispace0,
    )
    .parse_next(input)
}

/// Largest die accepted by the `d{sides}` notation, all faces are allocated up front.
pub const MAX_SIDES: u32 = 100_000;

fn dice_sides(input: &mut &str) -> PResult<Vec<i64>> {
    preceded(
        'd',
        cut_err(non_zero_start_number.verify(|sides: &u32| *sides <= MAX_SIDES))
            .context(Label("dice sides"))
            .context(Expected(Description(
                "sides must be a number from 1 to 100000 without leading 0s",
            ))),
    )
    .map(|sides| (1..=i64::from(sides)).collect())
    .parse_next(input)
}

fn non_zero_start_number(input: &mut &str) -> PResult<u32> {
    (take_while(1.., '1'..='9'), digit0)
        .try_map(|(non_zero, other): (&str, &str)| format!("{non_zero}{other}").parse::<u32>())
        .parse_next(input)
}

fn bracketed_number_list(input: &mut &str) -> PResult<Vec<i64>> {
    delimited(
        '[',
        cut_err(number_list),
        cut_err(']'.context(Expected(CharLiteral(']')))),
    )
    .parse_next(input)
}

fn number_list(input: &mut &str) -> PResult<Vec<i64>> {
    separated(1.., number, ',').parse_next(input)
}

fn number(input: &mut &str) -> PResult<i64> {
    delimited(multispace0, dec_int, multispace0)
        .context(Label("face"))
        .parse_next(input)
}

fn word_list(input: &mut &str) -> PResult<Vec<String>> {
    separated(1.., word, ',').parse_next(input)
}

fn word(input: &mut &str) -> PResult<String> {
    delimited(
        multispace0,
        take_while(1.., |c: char| c.is_alphanumeric() || c == '_' || c == '-'),
        multispace0,
    )
    .map(|w: &str| w.to_owned())
    .context(Label("face"))
    .parse_next(input)
}
