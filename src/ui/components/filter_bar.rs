// SPDX-License-Identifier: MPL-2.0
//! Filter controls shared by the list pages.
//!
//! Each pick-list offers an "all" entry ([`Choice::Any`]) followed by the
//! values of one domain enum. The selected choice turns into a criterion
//! value: empty for `Any`, which the filter engine treats as "no
//! constraint".

use crate::domain::filter::DurationBucket;
use crate::domain::team::{
    CheckupKind, CheckupStatus, Difficulty, DrillKind, MedicalStatus, PlayerStatus, Position,
    SessionStatus, Sport,
};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::modal::FocusId;
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::{button, pick_list, text, text_input, Row, Text};
use iced::{alignment, Element, Length, Theme};
use std::fmt;

/// A value a filter pick-list can hold.
pub trait FilterOption: Copy + PartialEq + fmt::Display + 'static {
    /// Label of the "no constraint" entry, e.g. "All positions".
    const ANY_LABEL: &'static str;

    /// Selectable values in display order.
    fn options() -> Vec<Self>;

    /// Criterion value for this option.
    fn criterion_value(self) -> String;
}

macro_rules! filter_option {
    ($ty:ty, $any:literal, $values:expr, |$v:ident| $value:expr) => {
        impl FilterOption for $ty {
            const ANY_LABEL: &'static str = $any;

            fn options() -> Vec<Self> {
                $values.to_vec()
            }

            fn criterion_value(self) -> String {
                let $v = self;
                $value
            }
        }
    };
}

// Positions filter by substring of their label, so the label is the value.
filter_option!(Position, "All positions", Position::ALL, |p| p.label().to_string());
filter_option!(PlayerStatus, "All statuses", PlayerStatus::ALL, |s| s.token());
filter_option!(Sport, "All sports", Sport::ALL, |s| s.token());
filter_option!(DrillKind, "All types", DrillKind::ALL, |k| k.token());
filter_option!(Difficulty, "All levels", Difficulty::ALL, |d| d.token());
filter_option!(SessionStatus, "All statuses", SessionStatus::ALL, |s| s.token());
filter_option!(MedicalStatus, "All statuses", MedicalStatus::ALL, |s| s.token());
filter_option!(CheckupKind, "All types", CheckupKind::ALL, |k| k.token());
filter_option!(CheckupStatus, "All statuses", CheckupStatus::ALL, |s| s.token());
filter_option!(DurationBucket, "Any duration", DurationBucket::ALL, |b| b.token().to_string());

/// Pick-list entry: everything, or one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<T> {
    Any,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::Any
    }
}

impl<T: FilterOption> Choice<T> {
    /// "All" entry followed by every value.
    #[must_use]
    pub fn all() -> Vec<Self> {
        std::iter::once(Choice::Any)
            .chain(T::options().into_iter().map(Choice::Only))
            .collect()
    }

    /// Criterion value; empty for [`Choice::Any`].
    #[must_use]
    pub fn criterion_value(self) -> String {
        match self {
            Choice::Any => String::new(),
            Choice::Only(value) => value.criterion_value(),
        }
    }

    #[must_use]
    pub fn selected(self) -> Option<T> {
        match self {
            Choice::Any => None,
            Choice::Only(value) => Some(value),
        }
    }
}

impl<T: FilterOption> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Any => f.write_str(T::ANY_LABEL),
            Choice::Only(value) => value.fmt(f),
        }
    }
}

/// Pick-list bound to one [`Choice`].
pub fn picker<'a, T, M>(current: Choice<T>, on_select: impl Fn(Choice<T>) -> M + 'a) -> Element<'a, M>
where
    T: FilterOption,
    M: Clone + 'a,
{
    pick_list(Choice::<T>::all(), Some(current), on_select)
        .width(Length::Fixed(sizing::FILTER_WIDTH))
        .text_size(typography::BODY)
        .into()
}

/// Search box carrying `focus_id` so shortcuts can focus it.
pub fn search_box<'a, M>(
    focus_id: FocusId,
    placeholder: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> M + 'a,
) -> Element<'a, M>
where
    M: Clone + 'a,
{
    text_input(placeholder, value)
        .id(focus_id.widget_id())
        .on_input(on_input)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fixed(sizing::SEARCH_WIDTH))
        .into()
}

/// "Clear filters" button; disabled while nothing is filtered.
pub fn clear_button<'a, M: Clone + 'a>(active: bool, on_press: M) -> Element<'a, M> {
    let label = Text::new("Clear filters").size(typography::BODY);
    if active {
        button(label)
            .on_press(on_press)
            .style(styles::button::unselected)
            .into()
    } else {
        button(label).style(styles::button::disabled()).into()
    }
}

/// "Showing N of M" line under the filter row.
pub fn summary<'a, M: 'a>(visible: usize, total: usize, noun: &str) -> Element<'a, M> {
    let line = if visible == total {
        format!("{total} {noun}")
    } else {
        format!("Showing {visible} of {total} {noun}")
    };
    text(line)
        .size(typography::CAPTION)
        .style(|_theme: &Theme| text::Style {
            color: Some(theme::muted_text_color()),
        })
        .into()
}

/// Lays controls out in one wrapping-free row.
pub fn bar<'a, M: 'a>(controls: Vec<Element<'a, M>>) -> Element<'a, M> {
    Row::with_children(controls)
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_is_listed_first_and_maps_to_empty_value() {
        let choices = Choice::<PlayerStatus>::all();
        assert_eq!(choices.first(), Some(&Choice::Any));
        assert_eq!(choices.len(), PlayerStatus::ALL.len() + 1);
        assert_eq!(Choice::<PlayerStatus>::Any.criterion_value(), "");
    }

    #[test]
    fn values_use_control_tokens() {
        assert_eq!(Choice::Only(PlayerStatus::Injured).criterion_value(), "injured");
        assert_eq!(Choice::Only(DurationBucket::Long).criterion_value(), "long");
        assert_eq!(Choice::Only(Position::Midfielder).criterion_value(), "Midfielder");
        assert_eq!(Choice::Only(CheckupKind::PreMatch).criterion_value(), "pre-match");
    }

    #[test]
    fn display_uses_any_label() {
        assert_eq!(Choice::<Sport>::Any.to_string(), "All sports");
        assert_eq!(Choice::Only(Sport::Volleyball).to_string(), "Volleyball");
    }

    #[test]
    fn selected_unwraps_only() {
        assert_eq!(Choice::Only(Difficulty::Advanced).selected(), Some(Difficulty::Advanced));
        assert_eq!(Choice::<Difficulty>::Any.selected(), None);
    }
}
