// SPDX-License-Identifier: MPL-2.0
//! Applies animation frames to widget trees.

use super::Frame;
use crate::ui::styles;
use iced::widget::{container, Stack};
use iced::{Element, Length, Padding};

/// Renders content at a given animation frame.
///
/// The shell and the section views only hand over content and a frame, so
/// the presentation can change without touching navigation state.
pub trait AnimatedMount {
    fn mount<'a, M: 'a>(&self, content: Element<'a, M>, frame: Frame) -> Element<'a, M>;
}

/// Fade plus vertical slide.
///
/// Opacity is drawn as a page-colored veil over the content, and the slide as
/// top padding. Scale shrinks the content horizontally around its center.
/// Upward offsets are not drawn since the content is already top-aligned.
#[derive(Debug, Clone, Copy)]
pub struct FadeSlide {
    /// Horizontal inset in pixels applied at scale 0.
    pub scale_inset: f32,
}

impl Default for FadeSlide {
    fn default() -> Self {
        Self { scale_inset: 400.0 }
    }
}

impl FadeSlide {
    fn padding(&self, frame: Frame) -> Padding {
        let side = ((1.0 - frame.scale) * self.scale_inset / 2.0).max(0.0);
        Padding {
            top: frame.offset_y.max(0.0),
            right: side,
            bottom: 0.0,
            left: side,
        }
    }
}

impl AnimatedMount for FadeSlide {
    fn mount<'a, M: 'a>(&self, content: Element<'a, M>, frame: Frame) -> Element<'a, M> {
        if frame.is_rest() {
            return content;
        }

        let shifted = container(content)
            .padding(self.padding(frame))
            .width(Length::Fill);

        let veil = container(iced::widget::Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::veil(1.0 - frame.opacity));

        Stack::new().push(shifted).push(veil).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::text;

    #[test]
    fn padding_reflects_offset_and_scale() {
        let fade = FadeSlide::default();
        let padding = fade.padding(Frame {
            opacity: 0.5,
            offset_y: 10.0,
            scale: 0.95,
        });

        assert_eq!(padding.top, 10.0);
        assert!((padding.left - 10.0).abs() < 1e-4);
        assert_eq!(padding.left, padding.right);
    }

    #[test]
    fn upward_offset_is_not_padded() {
        let fade = FadeSlide::default();
        let padding = fade.padding(Frame {
            opacity: 0.5,
            offset_y: -20.0,
            scale: 1.0,
        });
        assert_eq!(padding.top, 0.0);
        assert_eq!(padding.left, 0.0);
    }

    #[test]
    fn mount_builds_for_rest_and_moving_frames() {
        let fade = FadeSlide::default();
        let _rest: Element<'_, ()> = fade.mount(text("content").into(), Frame::REST);
        let _moving: Element<'_, ()> = fade.mount(
            text("content").into(),
            Frame {
                opacity: 0.2,
                offset_y: 15.0,
                scale: 0.96,
            },
        );
    }
}
