use crate::cities::SUPPORTED_CITIES;
use crate::domain::{ProjectStatus, PropertyFilter};
use lazy_static::lazy_static;
use regex::Regex;

const CRORE: f64 = 10_000_000.0;
const LAKH: f64 = 100_000.0;

// A number is only a price when a Cr/Lakh unit sits right next to it, and
// only a BHK count when "bhk"/"bedroom" does. Everything else is noise.
const UNIT: &str = r"cr(?:ores?)?|lakhs?|lacs?|l";

lazy_static! {
    // "between 3 cr and 7 cr"; a bound missing its unit inherits the other's
    static ref BETWEEN_RE: Regex = Regex::new(&format!(
        r"between\s+(\d+(?:\.\d+)?)\s*(?:({UNIT})\b)?\s*and\s+(\d+(?:\.\d+)?)\s*(?:({UNIT})\b)?"
    ))
    .unwrap();
    static ref UNDER_RE: Regex = Regex::new(&format!(
        r"(?:under|below|less\s+than)\s+(\d+(?:\.\d+)?)\s*({UNIT})\b"
    ))
    .unwrap();
    static ref ABOVE_RE: Regex = Regex::new(&format!(
        r"(?:above|over|more\s+than)\s+(\d+(?:\.\d+)?)\s*({UNIT})\b"
    ))
    .unwrap();
    static ref AMOUNT_RE: Regex =
        Regex::new(&format!(r"(\d+(?:\.\d+)?)\s*({UNIT})\b")).unwrap();
    static ref BHK_RE: Regex = Regex::new(
        r"(\d+|one|two|three|four|five|six|seven|eight|nine|ten)\s*(?:bhk|bedrooms?)\b"
    )
    .unwrap();
    // Capitalization matters here, so this one runs on the raw text.
    static ref IN_NAME_RE: Regex = Regex::new(r"\bin\s+([A-Z][A-Za-z0-9]+)").unwrap();
}

/// Turn free text into a structured filter. Never fails: text the parser
/// cannot read yields an empty filter, which downstream means "show
/// everything" rather than an error.
pub fn parse(text: &str) -> PropertyFilter {
    let lower = text.to_lowercase();
    let mut filter = PropertyFilter::default();

    // Spans of the winning price phrase, so its numbers can't double as BHK.
    let mut price_spans: Vec<(usize, usize)> = Vec::new();

    parse_price(&lower, &mut filter, &mut price_spans);
    parse_bhk(&lower, &price_spans, &mut filter);
    parse_city(&lower, &mut filter);
    parse_status(&lower, &mut filter);
    parse_project_name(text, &lower, &mut filter);

    filter
}

fn unit_multiplier(unit: &str) -> f64 {
    if unit.starts_with('c') {
        CRORE
    } else {
        LAKH
    }
}

fn to_inr(number: &str, unit: &str) -> Option<i64> {
    let value: f64 = number.parse().ok()?;
    Some((value * unit_multiplier(unit)).round() as i64)
}

/// Price phrases in priority order: "between X and Y", then "under X",
/// then "above X", then a single bare amount. A bare amount is treated as
/// an upper bound: "under" is the most common intent for an unqualified
/// budget.
fn parse_price(lower: &str, filter: &mut PropertyFilter, spans: &mut Vec<(usize, usize)>) {
    if let Some(caps) = BETWEEN_RE.captures(lower) {
        let unit_a = caps.get(2).map(|m| m.as_str());
        let unit_b = caps.get(4).map(|m| m.as_str());
        // At least one bound must carry a unit, otherwise the numbers are
        // not amounts at all.
        if let (Some(ua), Some(ub)) = (unit_a.or(unit_b), unit_b.or(unit_a)) {
            let a = to_inr(&caps[1], ua);
            let b = to_inr(&caps[3], ub);
            if let (Some(a), Some(b)) = (a, b) {
                filter.price_min_inr = Some(a.min(b));
                filter.price_max_inr = Some(a.max(b));
                let m = caps.get(0).unwrap();
                spans.push((m.start(), m.end()));
                return;
            }
        }
    }

    if let Some(caps) = UNDER_RE.captures(lower) {
        if let Some(amount) = to_inr(&caps[1], &caps[2]) {
            filter.price_max_inr = Some(amount);
            let m = caps.get(0).unwrap();
            spans.push((m.start(), m.end()));
            return;
        }
    }

    if let Some(caps) = ABOVE_RE.captures(lower) {
        if let Some(amount) = to_inr(&caps[1], &caps[2]) {
            filter.price_min_inr = Some(amount);
            let m = caps.get(0).unwrap();
            spans.push((m.start(), m.end()));
            return;
        }
    }

    if let Some(caps) = AMOUNT_RE.captures(lower) {
        if let Some(amount) = to_inr(&caps[1], &caps[2]) {
            filter.price_max_inr = Some(amount);
            let m = caps.get(0).unwrap();
            spans.push((m.start(), m.end()));
        }
    }
}

fn spans_overlap(a: (usize, usize), b: (usize, usize)) -> bool {
    a.0 < b.1 && b.0 < a.1
}

/// First number glued to "bhk"/"bedroom" wins, skipping numbers the price
/// phrase already consumed.
fn parse_bhk(lower: &str, price_spans: &[(usize, usize)], filter: &mut PropertyFilter) {
    for caps in BHK_RE.captures_iter(lower) {
        let number = caps.get(1).unwrap();
        let span = (number.start(), number.end());
        if price_spans.iter().any(|p| spans_overlap(*p, span)) {
            continue;
        }
        if let Some(count) = parse_count(number.as_str()) {
            filter.bhk = Some(count);
            return;
        }
    }
}

fn parse_count(word: &str) -> Option<i64> {
    if let Ok(n) = word.parse::<i64>() {
        return Some(n);
    }
    let n = match word {
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        _ => return None,
    };
    Some(n)
}

/// Case-insensitive substring scan over the supported city names; the city
/// occurring earliest in the text wins when several appear.
fn parse_city(lower: &str, filter: &mut PropertyFilter) {
    let mut earliest: Option<(usize, &str)> = None;
    for (_, name) in SUPPORTED_CITIES {
        if let Some(pos) = lower.find(&name.to_lowercase()) {
            match earliest {
                Some((best, _)) if best <= pos => {}
                _ => earliest = Some((pos, name)),
            }
        }
    }
    if let Some((_, name)) = earliest {
        filter.city = Some(name.to_string());
    }
}

/// "ready" → ready to move, "construction" → under construction. Both in
/// one query contradict each other, and the status stays unconstrained.
fn parse_status(lower: &str, filter: &mut PropertyFilter) {
    let ready = lower.contains("ready");
    let construction = lower.contains("construction");
    filter.status = match (ready, construction) {
        (true, false) => Some(ProjectStatus::ReadyToMove),
        (false, true) => Some(ProjectStatus::UnderConstruction),
        _ => None,
    };
}

// Words that can sit next to "project" without being a project name.
const NAME_STOPWORDS: &[&str] = &[
    "a",
    "all",
    "an",
    "any",
    "apartment",
    "apartments",
    "bhk",
    "construction",
    "cr",
    "crore",
    "crores",
    "find",
    "flat",
    "flats",
    "for",
    "in",
    "l",
    "lac",
    "lacs",
    "lakh",
    "lakhs",
    "me",
    "move",
    "project",
    "projects",
    "properties",
    "property",
    "ready",
    "show",
    "that",
    "the",
    "this",
    "to",
    "under",
];

fn is_name_candidate(token: &str) -> bool {
    if token.len() < 2 || NAME_STOPWORDS.contains(&token) {
        return false;
    }
    if token.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return false;
    }
    !SUPPORTED_CITIES
        .iter()
        .any(|(_, name)| name.eq_ignore_ascii_case(token))
}

/// Lowest-confidence field: the token next to the word "project", or an
/// "in <Capitalized>" token that is not a supported city. Tokens already
/// explained by a stronger signal never land here.
fn parse_project_name(original: &str, lower: &str, filter: &mut PropertyFilter) {
    let tokens: Vec<&str> = lower
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    if let Some(pos) = tokens
        .iter()
        .position(|t| *t == "project" || *t == "projects")
    {
        let before = pos.checked_sub(1).map(|i| tokens[i]);
        let after = tokens.get(pos + 1).copied();
        let candidate = [before, after]
            .into_iter()
            .flatten()
            .find(|t| is_name_candidate(t));
        if let Some(name) = candidate {
            filter.project_name = Some(name.to_string());
            return;
        }
    }

    if let Some(caps) = IN_NAME_RE.captures(original) {
        let token = &caps[1];
        if is_name_candidate(&token.to_lowercase()) {
            filter.project_name = Some(token.to_lowercase());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_query_with_city_bhk_and_budget() {
        let filter = parse("3BHK flat in Mumbai under 5 Cr");
        assert_eq!(filter.city.as_deref(), Some("Mumbai"));
        assert_eq!(filter.bhk, Some(3));
        assert_eq!(filter.price_max_inr, Some(50_000_000));
        assert_eq!(filter.price_min_inr, None);
        assert_eq!(filter.status, None);
        assert_eq!(filter.project_name, None);
    }

    #[test]
    fn ready_to_move_query() {
        let filter = parse("2BHK ready to move in Pune");
        assert_eq!(filter.city.as_deref(), Some("Pune"));
        assert_eq!(filter.bhk, Some(2));
        assert_eq!(filter.status, Some(ProjectStatus::ReadyToMove));
        assert_eq!(filter.project_name, None);
    }

    #[test]
    fn between_range_is_normalized() {
        let filter = parse("4BHK between 3 Cr and 7 Cr");
        assert_eq!(filter.bhk, Some(4));
        assert_eq!(filter.price_min_inr, Some(30_000_000));
        assert_eq!(filter.price_max_inr, Some(70_000_000));
    }

    #[test]
    fn between_bounds_are_reordered() {
        let filter = parse("between 7 cr and 3 cr");
        assert_eq!(filter.price_min_inr, Some(30_000_000));
        assert_eq!(filter.price_max_inr, Some(70_000_000));
    }

    #[test]
    fn between_inherits_the_unit_across_bounds() {
        let filter = parse("between 3 and 7 cr");
        assert_eq!(filter.price_min_inr, Some(30_000_000));
        assert_eq!(filter.price_max_inr, Some(70_000_000));
    }

    #[test]
    fn lakh_amounts_normalize() {
        let filter = parse("under 50 L");
        assert_eq!(filter.price_max_inr, Some(5_000_000));

        let filter = parse("above 75 lakhs");
        assert_eq!(filter.price_min_inr, Some(7_500_000));
    }

    #[test]
    fn decimal_amounts_normalize() {
        let filter = parse("flats above 1.5 cr");
        assert_eq!(filter.price_min_inr, Some(15_000_000));
    }

    #[test]
    fn bare_amount_is_an_upper_bound() {
        let filter = parse("3bhk 2 cr");
        assert_eq!(filter.bhk, Some(3));
        assert_eq!(filter.price_max_inr, Some(20_000_000));
        assert_eq!(filter.price_min_inr, None);
    }

    #[test]
    fn number_without_unit_is_not_a_price() {
        let filter = parse("under 5");
        assert_eq!(filter.price_min_inr, None);
        assert_eq!(filter.price_max_inr, None);
    }

    #[test]
    fn bhk_and_price_numbers_stay_separate() {
        let filter = parse("2bhk under 2 cr");
        assert_eq!(filter.bhk, Some(2));
        assert_eq!(filter.price_max_inr, Some(20_000_000));
    }

    #[test]
    fn first_bhk_mention_wins() {
        let filter = parse("2bhk or 3bhk");
        assert_eq!(filter.bhk, Some(2));
    }

    #[test]
    fn spelled_out_bedrooms_count() {
        let filter = parse("two bedroom in Mumbai");
        assert_eq!(filter.bhk, Some(2));
        assert_eq!(filter.city.as_deref(), Some("Mumbai"));
    }

    #[test]
    fn earliest_city_mention_wins() {
        let filter = parse("pune or mumbai");
        assert_eq!(filter.city.as_deref(), Some("Pune"));
    }

    #[test]
    fn contradictory_status_stays_unconstrained() {
        let filter = parse("ready to move under construction");
        assert_eq!(filter.status, None);
    }

    #[test]
    fn construction_alone_sets_status() {
        let filter = parse("2bhk under construction in pune");
        assert_eq!(filter.status, Some(ProjectStatus::UnderConstruction));
        assert_eq!(filter.bhk, Some(2));
    }

    #[test]
    fn project_keyword_picks_the_adjacent_token() {
        let filter = parse("Properties in Gurukripa project");
        assert_eq!(filter.project_name.as_deref(), Some("gurukripa"));
        assert_eq!(filter.city, None);
    }

    #[test]
    fn capitalized_in_token_becomes_a_name_filter() {
        let filter = parse("1BHK in Chembur under 2 Cr");
        assert_eq!(filter.bhk, Some(1));
        assert_eq!(filter.price_max_inr, Some(20_000_000));
        assert_eq!(filter.project_name.as_deref(), Some("chembur"));
        assert_eq!(filter.city, None);
    }

    #[test]
    fn capitalized_city_is_not_a_name_filter() {
        let filter = parse("flats in Pune");
        assert_eq!(filter.city.as_deref(), Some("Pune"));
        assert_eq!(filter.project_name, None);
    }

    #[test]
    fn empty_and_noise_queries_parse_to_nothing() {
        assert!(parse("").is_empty());
        assert!(parse("asdf qwerty zxcv").is_empty());
        assert!(parse("show me something nice").is_empty());
    }
}
