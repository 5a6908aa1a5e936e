use chrono::Local;
use scraper::{ElementRef, Html, Selector};
use tokio::task::spawn_blocking;

use crate::model::{Category, ExtractProfile, Identity, Nominee, UNKNOWN_TITLE};
use crate::{info_time, warn_time, Error, Result};

/// Marker appended to some category titles on the page.
const MORE_INFO: &str = "(more info)";
/// The third experts odds cell holds the fractional odds.
const ODDS_INDEX: usize = 2;
/// Class set of an experts odds cell; a cell carrying any other class is not one.
const ODDS_CLASSES: [&str; 3] = ["predictions-odds", "predictions-experts", "gray"];

/// All the selectors needed to walk the odds page, compiled once per parse.
struct Selectors {
    wrapper: Selector,
    title: Selector,
    list: Selector,
    item: Selector,
    position: Selector,
    name: Selector,
    photo: Selector,
    img: Selector,
    odds: Selector,
}

impl Selectors {
    fn new() -> Result<Self> {
        Ok(Self {
            wrapper: create_selector("div.predictions-wrapper")?,
            title: create_selector("div.category-title")?,
            list: create_selector("ul.predictions-list")?,
            item: create_selector("li")?,
            position: create_selector("div.predictions-position-v2")?,
            name: create_selector("div.predictions-name")?,
            photo: create_selector("div.predictions-photo")?,
            img: create_selector("img")?,
            odds: create_selector("div.predictions-odds.predictions-experts.gray")?,
        })
    }
}

/// Parses the page on the blocking pool (`Html` is not `Send`) and awaits the result.
pub async fn parse_html(html: String, profile: ExtractProfile) -> Result<Vec<Category>> {
    let start_time = Local::now();
    let categories = spawn_blocking(move || extract_categories(&html, profile)).await??;

    let nominee_count: usize = categories.iter().map(|c| c.nominees.len()).sum();
    info_time!(
        start_time,
        "Extracted {} categories, {} nominees",
        categories.len(),
        nominee_count
    );
    Ok(categories)
}

/// Walks every predictions wrapper in document order, producing one `Category` each.
/// Missing elements inside a wrapper become `None`, they never fail the parse.
pub fn extract_categories(html: &str, profile: ExtractProfile) -> Result<Vec<Category>> {
    let sel = Selectors::new()?;
    let doc = Html::parse_document(html);

    let categories = doc
        .select(&sel.wrapper)
        .map(|wrapper| extract_category(wrapper, &sel, profile))
        .collect();
    Ok(categories)
}

fn extract_category(wrapper: ElementRef, sel: &Selectors, profile: ExtractProfile) -> Category {
    let title = first_match(wrapper, &sel.title)
        .map(|el| clean_title(&element_text(el)))
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string());

    let nominees = match first_match(wrapper, &sel.list) {
        Some(list) => list
            .select(&sel.item)
            .map(|item| extract_nominee(item, sel, profile))
            .collect(),
        None => {
            warn_time!("Category '{title}' has no predictions list");
            Vec::new()
        }
    };

    Category { title, nominees }
}

fn extract_nominee(item: ElementRef, sel: &Selectors, profile: ExtractProfile) -> Nominee {
    let position = first_match(item, &sel.position).map(|el| element_text(el).trim().to_string());

    let name = first_match(item, &sel.name).map(|el| element_text(el).trim().to_string());
    let identity = if profile.split_actor_movie {
        split_name(name)
    } else {
        Identity::Named { name }
    };

    let image = profile.include_image.then(|| {
        first_match(item, &sel.photo)
            .and_then(|photo| first_match(photo, &sel.img))
            .and_then(|img| img.value().attr("src"))
            .map(str::to_string)
    });

    let odds = item
        .select(&sel.odds)
        .filter(|el| el.value().classes().all(|c| ODDS_CLASSES.contains(&c)))
        .nth(ODDS_INDEX)
        .map(|el| element_text(el).trim().to_string());

    Nominee {
        position,
        image,
        odds,
        identity,
    }
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::InvalidSelector(sel_str.into()))
}

#[inline]
fn first_match<'a>(el: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    el.select(selector).next()
}

/// Concatenated text of every descendant text node, line breaks included.
fn element_text(el: ElementRef) -> String {
    el.text().collect()
}

/// Drops tabs, turns newlines into spaces, removes the `(more info)` marker and trims.
pub fn clean_title(raw: &str) -> String {
    raw.trim()
        .replace('\t', "")
        .replace('\n', " ")
        .replace(MORE_INFO, "")
        .trim()
        .to_string()
}

/// A trimmed name holding a line break is `actor\nmovie`; anything else stays a plain name.
pub fn split_name(name: Option<String>) -> Identity {
    if let Some((actor, movie)) = name.as_deref().and_then(|n| n.split_once('\n')) {
        let movie = movie.trim();
        return Identity::Credit {
            actor: actor.trim().to_string(),
            movie: (!movie.is_empty()).then(|| movie.to_string()),
        };
    }
    Identity::Named { name }
}
