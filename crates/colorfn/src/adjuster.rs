//! The adjuster list: named, toggleable, valued color operations.
//!
//! The list is ordered and the order matters, since it is the order the
//! adjusters appear in a `color()` expression. Lookups go by name.

use std::fmt;

use crate::error::{ColorError, Result};
use crate::properties::{ColorProperties, leading_int};

/// Suffix UI controls append to an adjuster name for their value input.
const VALUE_SUFFIX: &str = "Value";

/// The operations a user can stack onto a base color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdjusterKind {
    Alpha,
    Saturation,
    Hue,
    Lightness,
    Whiteness,
    Blackness,
    Tint,
    Shade,
    Contrast,
}

impl AdjusterKind {
    /// Canonical order of the adjuster list.
    pub const ALL: [AdjusterKind; 9] = [
        AdjusterKind::Alpha,
        AdjusterKind::Saturation,
        AdjusterKind::Hue,
        AdjusterKind::Lightness,
        AdjusterKind::Whiteness,
        AdjusterKind::Blackness,
        AdjusterKind::Tint,
        AdjusterKind::Shade,
        AdjusterKind::Contrast,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AdjusterKind::Alpha => "alpha",
            AdjusterKind::Saturation => "saturation",
            AdjusterKind::Hue => "hue",
            AdjusterKind::Lightness => "lightness",
            AdjusterKind::Whiteness => "whiteness",
            AdjusterKind::Blackness => "blackness",
            AdjusterKind::Tint => "tint",
            AdjusterKind::Shade => "shade",
            AdjusterKind::Contrast => "contrast",
        }
    }

    pub fn short_name(self) -> Option<&'static str> {
        match self {
            AdjusterKind::Alpha => Some("a"),
            AdjusterKind::Saturation => Some("s"),
            AdjusterKind::Hue => Some("h"),
            AdjusterKind::Lightness => Some("l"),
            AdjusterKind::Whiteness => Some("w"),
            AdjusterKind::Blackness => Some("b"),
            AdjusterKind::Tint | AdjusterKind::Shade | AdjusterKind::Contrast => None,
        }
    }

    /// `%` for everything but hue, which is unitless degrees.
    pub fn unit(self) -> Option<&'static str> {
        match self {
            AdjusterKind::Hue => None,
            _ => Some("%"),
        }
    }

    pub fn max_value(self) -> i32 {
        match self {
            AdjusterKind::Hue => 360,
            _ => 100,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}

impl fmt::Display for AdjusterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One entry of the adjuster list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Adjuster {
    pub kind: AdjusterKind,
    pub enabled: bool,
    pub value: i32,
}

impl Adjuster {
    pub fn new(kind: AdjusterKind) -> Self {
        Self {
            kind,
            enabled: false,
            value: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn short_name(&self) -> Option<&'static str> {
        self.kind.short_name()
    }

    pub fn unit(&self) -> Option<&'static str> {
        self.kind.unit()
    }

    pub fn max_value(&self) -> i32 {
        self.kind.max_value()
    }

    /// `name(valueunit)`, using the short name when asked and one exists.
    pub fn to_call(&self, use_short_names: bool) -> String {
        let name = match self.short_name() {
            Some(short) if use_short_names => short,
            _ => self.name(),
        };
        format!("{}({}{})", name, self.value, self.unit().unwrap_or(""))
    }
}

/// A change coming from an adjuster control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdjusterEdit {
    /// Flip the enabled flag.
    Toggle,
    /// Set the value from raw control text; parsed as a base 10 integer.
    SetValue(String),
}

/// The ordered list of adjusters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjusterSet {
    adjusters: Vec<Adjuster>,
}

impl Default for AdjusterSet {
    fn default() -> Self {
        Self {
            adjusters: AdjusterKind::ALL.into_iter().map(Adjuster::new).collect(),
        }
    }
}

impl AdjusterSet {
    /// Clones `template`, disabling every adjuster and taking the values the
    /// color has a property for. Adjusters without one (tint, shade,
    /// contrast) keep the template value.
    pub fn seed_from_color(color_str: &str, template: &AdjusterSet) -> Result<Self> {
        let properties = ColorProperties::extract(color_str)?;
        let adjusters = template
            .adjusters
            .iter()
            .map(|a| Adjuster {
                kind: a.kind,
                enabled: false,
                value: properties.get(a.name()).unwrap_or(a.value),
            })
            .collect();
        Ok(Self { adjusters })
    }

    /// Applies a control edit to the adjuster named `target`.
    ///
    /// `target` may carry the `Value` suffix value inputs use. Setting a value
    /// also enables the adjuster. An unknown name is a caller bug and returns
    /// [`ColorError::UnknownAdjuster`].
    pub fn apply_edit(&mut self, target: &str, edit: &AdjusterEdit) -> Result<()> {
        let name = target.strip_suffix(VALUE_SUFFIX).unwrap_or(target);
        let adjuster = self
            .adjusters
            .iter_mut()
            .find(|a| a.name() == name)
            .ok_or_else(|| ColorError::UnknownAdjuster(target.to_string()))?;

        match edit {
            AdjusterEdit::Toggle => adjuster.enabled = !adjuster.enabled,
            AdjusterEdit::SetValue(raw) => {
                adjuster.value = leading_int(raw)
                    .ok_or_else(|| ColorError::InvalidAdjusterValue(raw.clone()))?;
                adjuster.enabled = true;
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Adjuster> {
        self.adjusters.iter().find(|a| a.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Adjuster> {
        self.adjusters.iter()
    }

    /// Enabled adjusters, in list order.
    pub fn enabled(&self) -> impl Iterator<Item = &Adjuster> {
        self.adjusters.iter().filter(|a| a.enabled)
    }

    pub fn len(&self) -> usize {
        self.adjusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjusters.is_empty()
    }
}
