//! Frame composition for the joystick display.
//!
//! Every frame is redrawn from scratch: clear, border, marker. The panel is
//! small enough that there is nothing to gain from dirty tracking.
//!
//! | Element | Geometry |
//! |---------|----------|
//! | Simple border | 127x63 outline at (0, 0) |
//! | Double border | Simple + 125x61 outline at (1, 1) |
//! | Marker | Filled 10x10 square at [`DisplayPosition`] |

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment};

use crate::config::{BORDER_HEIGHT, BORDER_WIDTH, MARKER_SIZE};
use crate::mapping::DisplayPosition;
use crate::state::BorderStyle;

/// One pixel outline that stays inside the rectangle's bounds.
const BORDER_STYLE: PrimitiveStyle<BinaryColor> = PrimitiveStyleBuilder::new()
    .stroke_color(BinaryColor::On)
    .stroke_width(1)
    .stroke_alignment(StrokeAlignment::Inside)
    .build();

const MARKER_STYLE: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_fill(BinaryColor::On);

/// Outer border rectangle.
const OUTER_BORDER: Rectangle = Rectangle::new(Point::zero(), Size::new(BORDER_WIDTH, BORDER_HEIGHT));

/// Inner rectangle of the double border, inset by one pixel on every side.
const INNER_BORDER: Rectangle = Rectangle::new(Point::new(1, 1), Size::new(BORDER_WIDTH - 2, BORDER_HEIGHT - 2));

/// Blank the whole surface.
pub fn clear_frame<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)
}

/// Draw the border for the given style.
pub fn draw_border<D>(
    target: &mut D,
    style: BorderStyle,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    OUTER_BORDER.into_styled(BORDER_STYLE).draw(target)?;

    if style == BorderStyle::Double {
        INNER_BORDER.into_styled(BORDER_STYLE).draw(target)?;
    }

    Ok(())
}

/// Draw the filled marker with its top-left corner at `position`.
///
/// Parts reaching past the panel edge are clipped by the draw target.
pub fn draw_marker<D>(
    target: &mut D,
    position: DisplayPosition,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Rectangle::new(position.as_point(), Size::new_equal(MARKER_SIZE))
        .into_styled(MARKER_STYLE)
        .draw(target)
}
