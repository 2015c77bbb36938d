//! Path-template composition.
//!
//! Combines route-level and controller-level prefixes with action-level template fragments into
//! the canonical, percent-decoded path templates handed to documentation tooling.

/// Combine a path prefix and a template fragment into a single path template.
///
/// The combination rules, evaluated in order:
///
/// 1. A fragment starting with `/` is root-anchored: it is returned with its leading `/`
///    stripped and the prefix is ignored entirely.
/// 2. If the prefix is empty, the fragment is returned unchanged.
/// 3. A single leading `/` is stripped from the prefix.
/// 4. If the fragment is empty, the prefix is returned.
/// 5. A fragment starting with `(` carries parameters bound directly to the resource the prefix
///    names, and is concatenated to the prefix without a separator.
/// 6. Otherwise the prefix and the fragment are joined with `/`.
///
/// The result is not percent-decoded; see [`decode`] and [`canonicalize`].
pub fn combine(prefix: &str, fragment: &str) -> String {
    if let Some(rooted) = fragment.strip_prefix('/') {
        return rooted.to_owned();
    }

    if prefix.is_empty() {
        return fragment.to_owned();
    }

    let prefix = prefix.strip_prefix('/').unwrap_or(prefix);

    if fragment.is_empty() {
        return prefix.to_owned();
    }

    if fragment.starts_with('(') {
        return format!("{prefix}{fragment}");
    }

    format!("{prefix}/{fragment}")
}

/// Percent-decode a combined path template into its canonical form.
///
/// Attribute declarations may carry percent-encoded characters; the canonical template stores
/// them decoded. Malformed escape sequences pass through unchanged and invalid UTF-8 decodes to
/// replacement characters, so decoding never fails. `+` is left untouched: templates are paths,
/// not form data.
pub fn decode(template: &str) -> String {
    percent_encoding::percent_decode_str(template)
        .decode_utf8_lossy()
        .into_owned()
}

/// Build the canonical path template for an action.
///
/// The route-level prefix is applied first, then the controller-level prefix, then the action
/// fragment, with the [`combine`] rules at every step. A root-anchored action fragment
/// therefore overrides both prefixes. The fully combined template is then percent-decoded.
pub fn canonicalize(route_prefix: &str, controller_prefix: Option<&str>, fragment: &str) -> String {
    let prefix = combine(route_prefix, controller_prefix.unwrap_or_default());

    decode(&combine(&prefix, fragment))
}
