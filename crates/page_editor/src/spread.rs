//! Book scaffolding - the standard spread sequence of a new document

use page_model::{LayoutId, PageType, Spread, DEFAULT_LAYOUT_ID};

/// Hard cap on addressable content pages per document
pub const MAX_PAGES: usize = 32;

/// Content spreads a fresh book starts with
const INITIAL_CONTENT_SPREADS: usize = 8;

/// Create one spread with both pages on the default layout
pub fn create_spread(left_type: PageType, right_type: PageType) -> Spread {
    Spread::new(left_type, right_type, LayoutId::from(DEFAULT_LAYOUT_ID))
}

/// The standard book scaffold: a cover spread, a front flyleaf spread,
/// eight content spreads, and a trailing reserved spread ending in the
/// back flyleaf. The first and last spread never count toward the
/// addressable page total.
pub fn standard_book() -> Vec<Spread> {
    let mut spreads = Vec::with_capacity(INITIAL_CONTENT_SPREADS + 3);
    spreads.push(create_spread(PageType::Cover, PageType::Content));
    spreads.push(create_spread(PageType::Flyleaf, PageType::Content));
    for _ in 0..INITIAL_CONTENT_SPREADS {
        spreads.push(create_spread(PageType::Content, PageType::Content));
    }
    spreads.push(create_spread(PageType::Content, PageType::Flyleaf));
    spreads
}
