//! Design tokens: one semantic palette per theme mode, rendered as CSS
//! custom properties. The scope-marker class on the document root is the
//! only channel that selects which palette applies.

use crate::theme::ThemeMode;

pub const FONT_BASE: &str = "'Atkinson Hyperlegible', sans-serif";
pub const FONT_CODE: &str = "'Fira Code', monospace";
pub const LINE_HEIGHT_BASE: &str = "1.6";

/// Semantic color tokens for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub background: &'static str,
    pub background_alt: &'static str,
    pub background_hover: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub text_on_primary: &'static str,
    pub text_placeholder: &'static str,
    pub border: &'static str,
    pub focus: &'static str,
    pub card_bg: &'static str,
    pub code_bg: &'static str,
    pub code_header_bg: &'static str,
    pub input_bg: &'static str,
    pub success: &'static str,
    pub success_bg: &'static str,
    pub warning: &'static str,
    pub warning_bg: &'static str,
    pub danger: &'static str,
    pub danger_bg: &'static str,
}

pub const LIGHT: Palette = Palette {
    primary: "#0066cc",
    background: "#ffffff",
    background_alt: "#f8f9fa",
    background_hover: "#e9ecef",
    text: "#212529",
    text_secondary: "#6c757d",
    text_on_primary: "#ffffff",
    text_placeholder: "#adb5bd",
    border: "#dee2e6",
    focus: "#0066cc",
    card_bg: "#ffffff",
    code_bg: "#f8f9fa",
    code_header_bg: "#e9ecef",
    input_bg: "#ffffff",
    success: "#198754",
    success_bg: "#d1e7dd",
    warning: "#997404",
    warning_bg: "#fff3cd",
    danger: "#dc3545",
    danger_bg: "#f8d7da",
};

pub const DARK: Palette = Palette {
    primary: "#3b82f6",
    background: "#121212",
    background_alt: "#1e1e1e",
    background_hover: "#2d2d2d",
    text: "#e5e5e5",
    text_secondary: "#adb5bd",
    text_on_primary: "#ffffff",
    text_placeholder: "#6c757d",
    border: "#2d2d2d",
    focus: "#3b82f6",
    card_bg: "#1e1e1e",
    code_bg: "#2d2d2d",
    code_header_bg: "#1e1e1e",
    input_bg: "#2d2d2d",
    success: "#10b981",
    success_bg: "#064e3b",
    warning: "#f59e0b",
    warning_bg: "#78350f",
    danger: "#ef4444",
    danger_bg: "#7f1d1d",
};

pub const HIGH_CONTRAST: Palette = Palette {
    primary: "#ffff00",
    background: "#000000",
    background_alt: "#121212",
    background_hover: "#333333",
    text: "#ffffff",
    text_secondary: "#ffffff",
    text_on_primary: "#000000",
    text_placeholder: "#ffffff",
    border: "#ffffff",
    focus: "#ffff00",
    card_bg: "#121212",
    code_bg: "#121212",
    code_header_bg: "#333333",
    input_bg: "#121212",
    success: "#00ff00",
    success_bg: "#003300",
    warning: "#ffff00",
    warning_bg: "#333300",
    danger: "#ff0000",
    danger_bg: "#330000",
};

impl Palette {
    /// Palette for a mode. Total by construction: every mode maps to an
    /// explicit palette, there is no fallthrough arm.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> &'static Self {
        match mode {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
            ThemeMode::HighContrast => &HIGH_CONTRAST,
        }
    }

    /// CSS custom-property declarations for this palette, ready to drop
    /// inside a scope block.
    #[must_use]
    pub fn css_variables(&self) -> String {
        format!(
            "--color-primary:{};\
             --color-background:{};\
             --color-background-alt:{};\
             --color-background-hover:{};\
             --color-text:{};\
             --color-text-secondary:{};\
             --color-text-on-primary:{};\
             --color-text-placeholder:{};\
             --color-border:{};\
             --color-focus:{};\
             --color-card-bg:{};\
             --color-code-bg:{};\
             --color-code-header-bg:{};\
             --color-input-bg:{};\
             --color-success:{};\
             --color-success-bg:{};\
             --color-warning:{};\
             --color-warning-bg:{};\
             --color-danger:{};\
             --color-danger-bg:{};",
            self.primary,
            self.background,
            self.background_alt,
            self.background_hover,
            self.text,
            self.text_secondary,
            self.text_on_primary,
            self.text_placeholder,
            self.border,
            self.focus,
            self.card_bg,
            self.code_bg,
            self.code_header_bg,
            self.input_bg,
            self.success,
            self.success_bg,
            self.warning,
            self.warning_bg,
            self.danger,
            self.danger_bg,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mode_has_a_distinct_palette() {
        let palettes: Vec<_> = ThemeMode::ALL
            .into_iter()
            .map(Palette::for_mode)
            .collect();
        assert_ne!(palettes[0], palettes[1]);
        assert_ne!(palettes[1], palettes[2]);
        assert_ne!(palettes[0], palettes[2]);
    }

    #[test]
    fn css_variables_declare_every_token() {
        for mode in ThemeMode::ALL {
            let css = Palette::for_mode(mode).css_variables();
            for name in [
                "--color-primary",
                "--color-background",
                "--color-text",
                "--color-border",
                "--color-focus",
                "--color-success-bg",
                "--color-danger-bg",
            ] {
                assert!(css.contains(name), "{mode}: missing {name}");
            }
        }
    }

    #[test]
    fn high_contrast_palette_is_black_on_white_inverted() {
        let hc = Palette::for_mode(ThemeMode::HighContrast);
        assert_eq!(hc.background, "#000000");
        assert_eq!(hc.text, "#ffffff");
        assert_eq!(hc.focus, "#ffff00");
    }
}
