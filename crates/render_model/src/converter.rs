//! Page -> render item conversion

use crate::{RenderModelError, ResolvedPage, ResolvedSlot, ResolvedSpread, Result};
use page_model::{LayoutTemplate, PageData, Spread};

/// Resolve one page against the layout catalog.
///
/// A dangling layout reference is a hard data-consistency fault for this
/// page; the caller renders a placeholder for it and keeps going.
pub fn resolve_page(page: &PageData, catalog: &[LayoutTemplate]) -> Result<ResolvedPage> {
    let layout = catalog
        .iter()
        .find(|l| l.id == page.layout_id)
        .ok_or_else(|| RenderModelError::LayoutNotFound(page.layout_id.clone()))?;

    let slots = layout
        .slots
        .iter()
        .map(|slot| {
            let content = page
                .content
                .get(&slot.id)
                .cloned()
                .or_else(|| slot.default_content.clone());
            let settings = page.slot_settings.get(&slot.id).cloned();
            ResolvedSlot {
                id: slot.id.clone(),
                kind: slot.kind,
                rect: slot.rect,
                rotation: slot.rotation,
                opacity: slot.opacity,
                border_radius: slot.border_radius,
                content,
                settings,
            }
        })
        .collect();

    Ok(ResolvedPage {
        page_id: page.id,
        background_color: page.background_color.clone(),
        background_image: layout.background_image.clone(),
        slots,
    })
}

/// Resolve both sides of a spread independently
pub fn resolve_spread(spread: &Spread, catalog: &[LayoutTemplate]) -> ResolvedSpread {
    ResolvedSpread {
        left: resolve_page(&spread.left_page, catalog),
        right: resolve_page(&spread.right_page, catalog),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use page_model::{
        LayoutId, PageSide, PageType, Rect, Slot, SlotId, SlotSettings, SlotType,
    };

    fn catalog_with_free_form() -> (Vec<LayoutTemplate>, LayoutId, SlotId) {
        let mut layout = LayoutTemplate::new("two up");
        let back = Slot::image(Rect::new(0.0, 0.0, 50.0, 100.0)).with_default_content("seed.jpg");
        let front = Slot::text(Rect::new(50.0, 0.0, 50.0, 100.0));
        let slot_id = front.id.clone();
        layout.slots.push(back);
        layout.slots.push(front);
        let id = layout.id.clone();
        (vec![layout], id, slot_id)
    }

    #[test]
    fn test_resolve_joins_content_and_geometry_in_paint_order() {
        let (catalog, layout_id, text_id) = catalog_with_free_form();
        let mut page = PageData::new(PageType::Content, layout_id);
        page.content.insert(text_id.clone(), "Hello".to_string());
        page.slot_settings.insert(text_id.clone(), SlotSettings::default());

        let resolved = resolve_page(&page, &catalog).unwrap();
        assert_eq!(resolved.slots.len(), 2);
        assert_eq!(resolved.slots[0].kind, SlotType::Image);
        // Page content wins; the seed fills slots the page left empty
        assert_eq!(resolved.slots[0].content.as_deref(), Some("seed.jpg"));
        assert_eq!(resolved.slots[1].content.as_deref(), Some("Hello"));
        assert_eq!(resolved.slots[1].id, text_id);
    }

    #[test]
    fn test_dangling_layout_reference_fails_that_page_only() {
        let (catalog, layout_id, _) = catalog_with_free_form();
        let mut spread = Spread::new(
            PageType::Content,
            PageType::Content,
            LayoutId::from("missing"),
        );
        spread.page_mut(PageSide::Right).layout_id = layout_id;

        let resolved = resolve_spread(&spread, &catalog);
        assert!(matches!(
            resolved.left,
            Err(RenderModelError::LayoutNotFound(_))
        ));
        assert!(resolved.right.is_ok());
    }

    #[test]
    fn test_grid_slots_resolve_without_rect() {
        let catalog = page_model::builtin_layouts();
        let page = PageData::new(PageType::Content, LayoutId::from("full_photo"));
        let resolved = resolve_page(&page, &catalog).unwrap();
        assert_eq!(resolved.slots.len(), 1);
        assert!(resolved.slots[0].rect.is_none());
    }

    #[test]
    fn test_resolved_page_serializes() {
        let (catalog, layout_id, _) = catalog_with_free_form();
        let page = PageData::new(PageType::Content, layout_id);
        let resolved = resolve_page(&page, &catalog).unwrap();
        let json = serde_json::to_string(&resolved).unwrap();
        let back: ResolvedPage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, resolved);
    }
}
