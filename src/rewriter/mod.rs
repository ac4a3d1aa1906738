//! The expansion engine: rewrites a template's token stream in place by
//! splicing in tokenized component fragments, then builds and serializes
//! the resulting tree.

mod settings;

use crate::errors::ExpansionError;
use crate::markers::{self, MarkerLexer, MarkerToken};
use crate::parser::{self, Token};
use crate::store::{FragmentStore, MemoryStore};
use crate::tree;

pub use self::settings::Settings;

/// Expands every substitution marker in `template_text` and returns the
/// canonically serialized result.
///
/// The template is tokenized into a growable buffer that is scanned left to
/// right. Whenever the scan hits a text or raw code token, its payload runs
/// through the marker lexer and grammar check; markers are then resolved
/// against `components` and the single buffer element is replaced by the
/// literal spans (kept verbatim, same token kind) interleaved with each
/// component's own token stream, stream sentinels stripped. The cursor is
/// not advanced over a splice, so spliced tokens are rescanned on the next
/// iterations and nested component references expand recursively, innermost
/// first, in source order.
///
/// A call-local guard counts scan iterations and fails the call once it
/// reaches [`Settings::loop_bound`], which is what terminates circularly
/// dependent components.
pub fn expand_str<C: FragmentStore>(
    template_text: &str,
    components: &C,
    settings: &Settings,
) -> Result<String, ExpansionError> {
    let mut buffer = parser::tokenize(template_text);
    let marker_lexer = MarkerLexer::new(&settings.start_seq, &settings.end_seq);

    let mut i = 0;
    let mut visits = 0;

    while i < buffer.len() {
        if visits >= settings.loop_bound {
            return Err(ExpansionError::CircularDependency(settings.loop_bound));
        }

        visits += 1;

        let replacement = match &buffer[i] {
            Token::Text(text) => expand_span(text, Token::Text, components, &marker_lexer)?,
            Token::RawCode(code) => expand_span(code, Token::RawCode, components, &marker_lexer)?,
            _ => None,
        };

        match replacement {
            Some(tokens) => {
                trace!(@splice i, tokens.len());

                buffer.splice(i..=i, tokens);
            }
            None => i += 1,
        }
    }

    let document = tree::build(&buffer, &settings.void_elements);

    Ok(tree::serialize(
        &document,
        settings.indent_width,
        &settings.void_elements,
    ))
}

/// Rewrites one text or raw code payload. Returns `None` when the span
/// contains no marker and can stay in the buffer untouched, or the token
/// sequence that replaces it. `make_literal` keeps literal spans the same
/// kind as the token they came from.
fn expand_span<C: FragmentStore>(
    text: &str,
    make_literal: fn(String) -> Token,
    components: &C,
    marker_lexer: &MarkerLexer<'_>,
) -> Result<Option<Vec<Token>>, ExpansionError> {
    let marker_tokens = marker_lexer.tokenize(text);

    if let Err(index) = markers::check(&marker_tokens) {
        return Err(ExpansionError::MalformedSyntax(index));
    }

    if !marker_tokens
        .iter()
        .any(|token| matches!(token, MarkerToken::Value(_)))
    {
        return Ok(None);
    }

    let mut replacement = Vec::new();

    for marker_token in marker_tokens {
        match marker_token {
            MarkerToken::Content(literal) => replacement.push(make_literal(literal)),
            MarkerToken::Value(name) => {
                let Some(component) = components.get(&name) else {
                    return Err(ExpansionError::ComponentNotFound(name));
                };

                let tokens = parser::tokenize(component);
                let content_len = tokens.len() - 2;

                // Only the component's own content is spliced in; its
                // stream sentinels stay behind.
                replacement.extend(tokens.into_iter().skip(1).take(content_len));
            }
            _ => (),
        }
    }

    Ok(Some(replacement))
}

/// A template/component store pair with fixed settings.
///
/// `process` resolves a template by name and expands it. The stores are
/// only read during a call, so a shared `Preprocessor` can serve concurrent
/// expansions.
pub struct Preprocessor<T: FragmentStore = MemoryStore, C: FragmentStore = MemoryStore> {
    templates: T,
    components: C,
    settings: Settings,
}

impl<T: FragmentStore, C: FragmentStore> Preprocessor<T, C> {
    pub fn new(templates: T, components: C) -> Self {
        Preprocessor::with_settings(templates, components, Settings::default())
    }

    pub fn with_settings(templates: T, components: C, settings: Settings) -> Self {
        Preprocessor {
            templates,
            components,
            settings,
        }
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    pub fn templates_mut(&mut self) -> &mut T {
        &mut self.templates
    }

    #[inline]
    pub fn components_mut(&mut self) -> &mut C {
        &mut self.components
    }

    /// Expands the named template.
    pub fn process(&self, template: &str) -> Result<String, ExpansionError> {
        let Some(text) = self.templates.get(template) else {
            return Err(ExpansionError::TemplateNotFound(template.to_string()));
        };

        expand_str(text, &self.components, &self.settings)
    }
}
