//! The state behind one color builder screen.
//!
//! A [`Session`] owns everything the engine needs between edits: the typed
//! base text, the last valid base color, the adjuster list, the short-name
//! preference and the selected output format. Every mutation recomputes the
//! expression, the output color and both contrast colors before returning.

use colorfn::{
    AdjusterEdit, AdjusterSet, CanonicalColor, ColorFormat, ColorFunctionEvaluator,
    DEFAULT_CONTRAST_AMOUNT, ExpressionEvaluator, RgbaColor, adjusters_string,
    color_from_query_val, contrast_color_with, function_string, query_param,
};

use crate::config::SessionConfig;
use crate::error::Result;
use crate::store::{MemoryStore, PreferenceStore, read_flag, write_flag};

/// One user's builder state: the base color, the adjusters applied to it and
/// everything derived from them.
///
/// The derived values (expressions, output color, contrast colors) are kept
/// in sync by every mutating method; getters never compute.
pub struct Session {
    config: SessionConfig,
    store: Box<dyn PreferenceStore>,
    evaluator: Box<dyn ExpressionEvaluator>,

    base_input: String,
    base: CanonicalColor,
    base_contrast: String,
    adjusters: AdjusterSet,

    expression: String,
    short_expression: String,
    output: CanonicalColor,
    output_contrast: String,

    use_short_names: bool,
    selected_format: Option<ColorFormat>,
}

impl Session {
    /// Starts from the configured default base color.
    pub fn new(
        config: SessionConfig,
        store: Box<dyn PreferenceStore>,
        evaluator: Box<dyn ExpressionEvaluator>,
    ) -> Result<Self> {
        let base = config.default_base_color.clone();
        Self::start(config, store, evaluator, &base)
    }

    /// Starts from the color in a query string such as `?color=%23b577f2`,
    /// falling back to `fragment` for an empty value and to the default base
    /// color when the query holds no valid color.
    pub fn from_query(
        config: SessionConfig,
        store: Box<dyn PreferenceStore>,
        evaluator: Box<dyn ExpressionEvaluator>,
        query: &str,
        fragment: Option<&str>,
    ) -> Result<Self> {
        let base = query_param(query, &config.query_param)
            .and_then(|raw| color_from_query_val(raw, fragment))
            .unwrap_or_else(|| config.default_base_color.clone());
        Self::start(config, store, evaluator, &base)
    }

    /// Default config, an empty [`MemoryStore`] and the built-in evaluator.
    pub fn with_defaults() -> Result<Self> {
        Self::new(
            SessionConfig::default(),
            Box::new(MemoryStore::new()),
            Box::new(ColorFunctionEvaluator),
        )
    }

    fn start(
        config: SessionConfig,
        store: Box<dyn PreferenceStore>,
        evaluator: Box<dyn ExpressionEvaluator>,
        base_input: &str,
    ) -> Result<Self> {
        let base = CanonicalColor::parse(base_input)?;
        let adjusters = AdjusterSet::seed_from_color(base_input, &AdjusterSet::default())?;
        let use_short_names = read_flag(store.as_ref(), &config.short_names_key)
            .unwrap_or_else(|err| {
                log::warn!("Could not read {}: {}", config.short_names_key, err);
                false
            });

        let mut session = Self {
            config,
            store,
            evaluator,
            base_input: base_input.to_string(),
            output: base.clone(),
            base,
            base_contrast: String::new(),
            adjusters,
            expression: String::new(),
            short_expression: String::new(),
            output_contrast: String::new(),
            use_short_names,
            selected_format: None,
        };
        session.base_contrast = session.contrast_for(&session.base);
        session.recompute();
        Ok(session)
    }

    /// Takes typed base color text.
    ///
    /// The text is always kept for display. Derived state only changes when
    /// it parses; then the adjuster list is reseeded from the new color with
    /// every entry disabled and tint, shade and contrast back at 0. Returns
    /// whether the text was a valid color.
    pub fn set_base_color(&mut self, input: &str) -> bool {
        self.base_input = input.to_string();

        let base = match CanonicalColor::parse(input) {
            Ok(base) => base,
            Err(err) => {
                log::debug!("Ignoring base color input {:?}: {}", input, err);
                return false;
            }
        };
        let adjusters = match AdjusterSet::seed_from_color(input, &AdjusterSet::default()) {
            Ok(adjusters) => adjusters,
            Err(err) => {
                log::debug!("Ignoring base color input {:?}: {}", input, err);
                return false;
            }
        };

        self.base_contrast = self.contrast_for(&base);
        self.base = base;
        self.adjusters = adjusters;
        self.recompute();
        true
    }

    /// Applies a toggle or value edit to the adjuster named `target`.
    ///
    /// Unknown adjusters and unparseable values are errors and leave the
    /// session unchanged.
    pub fn edit_adjuster(&mut self, target: &str, edit: &AdjusterEdit) -> Result<()> {
        self.adjusters.apply_edit(target, edit)?;
        self.recompute();
        Ok(())
    }

    /// Switches the expression display between long and short names and
    /// persists the choice.
    pub fn set_use_short_names(&mut self, use_short_names: bool) -> Result<()> {
        write_flag(
            self.store.as_mut(),
            &self.config.short_names_key,
            use_short_names,
        )?;
        log::debug!("{} = {}", self.config.short_names_key, use_short_names);
        self.use_short_names = use_short_names;
        Ok(())
    }

    /// Picks the format the output color is displayed in; `None` shows the
    /// output in its own format.
    pub fn select_format(&mut self, format: Option<ColorFormat>) {
        self.selected_format = format;
    }

    fn recompute(&mut self) {
        let base = self.evaluable_base();
        self.expression = function_string(&base, &adjusters_string(&self.adjusters, false));
        self.short_expression = function_string(&base, &adjusters_string(&self.adjusters, true));

        self.output = match self
            .evaluator
            .evaluate(&self.expression)
            .and_then(|out| CanonicalColor::parse(&out))
        {
            Ok(output) => output,
            Err(err) => {
                log::warn!(
                    "Could not evaluate {}: {}; showing the base color",
                    self.expression,
                    err
                );
                self.base.clone()
            }
        };
        self.output_contrast = self.contrast_for(&self.output);
    }

    /// The base as the evaluator accepts it: alpha hex is replaced by its
    /// `rgba()` rendering.
    fn evaluable_base(&self) -> String {
        if self.base.detected_format().is_alpha_hex() {
            self.base.rgb_string()
        } else {
            self.base.display().to_string()
        }
    }

    fn contrast_for(&self, color: &CanonicalColor) -> String {
        contrast_color_with(
            &color.rgb_string(),
            DEFAULT_CONTRAST_AMOUNT,
            self.evaluator.as_ref(),
        )
        .unwrap_or_else(|err| {
            log::warn!("Could not compute contrast for {}: {}", color.display(), err);
            RgbaColor::black().to_rgb_string()
        })
    }

    /// The base color text exactly as last typed.
    pub fn base_input(&self) -> &str {
        &self.base_input
    }

    /// The last valid base color.
    pub fn base_color(&self) -> &CanonicalColor {
        &self.base
    }

    pub fn base_contrast(&self) -> &str {
        &self.base_contrast
    }

    pub fn adjusters(&self) -> &AdjusterSet {
        &self.adjusters
    }

    /// The long-name `color()` expression.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The short-name `color()` expression.
    pub fn short_expression(&self) -> &str {
        &self.short_expression
    }

    /// The expression in the form the preference asks for.
    pub fn display_expression(&self) -> &str {
        if self.use_short_names {
            &self.short_expression
        } else {
            &self.expression
        }
    }

    /// Enabled adjuster calls without the base, e.g. `alpha(60%) tint(20%)`.
    pub fn adjusters_display(&self) -> String {
        adjusters_string(&self.adjusters, self.use_short_names)
            .trim()
            .to_string()
    }

    pub fn output_color(&self) -> &CanonicalColor {
        &self.output
    }

    pub fn output_contrast(&self) -> &str {
        &self.output_contrast
    }

    /// The output in the selected format when it has one, else in its own.
    pub fn output_display(&self) -> &str {
        self.selected_format
            .and_then(|format| self.output.format(format))
            .unwrap_or_else(|| self.output.display())
    }

    pub fn use_short_names(&self) -> bool {
        self.use_short_names
    }

    pub fn selected_format(&self) -> Option<ColorFormat> {
        self.selected_format
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorfn::ColorError;

    struct Failing;

    impl ExpressionEvaluator for Failing {
        fn evaluate(&self, expression: &str) -> colorfn::Result<String> {
            Err(ColorError::Syntax(expression.to_string()))
        }
    }

    #[test]
    fn test_evaluation_failure_falls_back_to_base() {
        let mut session = Session::new(
            SessionConfig::default(),
            Box::new(MemoryStore::new()),
            Box::new(Failing),
        )
        .unwrap();
        session
            .edit_adjuster("alpha", &AdjusterEdit::SetValue("10".to_string()))
            .unwrap();

        assert_eq!(session.expression(), "color(#2ac20d alpha(10%))");
        assert_eq!(session.output_color(), session.base_color());
        assert_eq!(session.output_contrast(), "rgb(0, 0, 0)");
    }

    #[test]
    fn test_alpha_hex_base_is_substituted() {
        let mut session = Session::with_defaults().unwrap();
        assert!(session.set_base_color("#ff0000bf"));
        assert_eq!(session.evaluable_base(), "rgba(255, 0, 0, 0.75)");
        assert_eq!(session.expression(), "color(rgba(255, 0, 0, 0.75))");
        assert_eq!(session.output_color().rgb_string(), "rgba(255, 0, 0, 0.75)");
    }
}
