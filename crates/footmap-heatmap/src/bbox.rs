use footmap_core::ScalarField;
use serde::{Deserialize, Serialize};

/// Inclusive pixel rectangle, always inside the image it was computed on.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: usize,
    pub right: usize,
    pub top: usize,
    pub bottom: usize,
}

impl BoundingBox {
    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        (self.left..=self.right).contains(&x) && (self.top..=self.bottom).contains(&y)
    }

    pub fn width(&self) -> usize {
        self.right - self.left + 1
    }

    pub fn height(&self) -> usize {
        self.bottom - self.top + 1
    }
}

/// Padded box around every strictly positive pixel of `field`.
///
/// Each side is grown by `padding` and clamped to the field. Returns `None`
/// when the field has no positive pixel at all.
pub fn find_bounding_box(field: &ScalarField, padding: usize) -> Option<BoundingBox> {
    let mut tight: Option<BoundingBox> = None;
    for y in 0..field.height {
        for x in 0..field.width {
            if field.get(x, y) <= 0.0 {
                continue;
            }
            let b = tight.get_or_insert(BoundingBox {
                left: x,
                right: x,
                top: y,
                bottom: y,
            });
            b.left = b.left.min(x);
            b.right = b.right.max(x);
            b.top = b.top.min(y);
            b.bottom = b.bottom.max(y);
        }
    }

    tight.map(|b| BoundingBox {
        left: b.left.saturating_sub(padding),
        right: b.right.saturating_add(padding).min(field.width - 1),
        top: b.top.saturating_sub(padding),
        bottom: b.bottom.saturating_add(padding).min(field.height - 1),
    })
}
