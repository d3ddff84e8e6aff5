//! Liquid snippet generation.
//!
//! The generated snippet exposes three render-time parameters:
//! - `size`: width and height in pixels (default: 24)
//! - `stroke_width`: stroke width (default: 2)
//! - `class`: additional CSS classes to append

/// Wrap extracted icon markup in the fixed Liquid snippet template.
///
/// Pure string formatting; identical inputs produce byte-identical output.
/// The markup is assumed valid; the icon set already guaranteed that by
/// successfully extracting it.
pub fn generate(markup: &str, name: &str) -> String {
    format!(
        r#"{{%- comment -%}}
  Icon: {name}
  Usage:
    {{% render 'icon-{name}' %}}
    {{% render 'icon-{name}', size: 32 %}}
    {{% render 'icon-{name}', class: 'custom-class' %}}
    {{% render 'icon-{name}', stroke_width: 1.5 %}}
{{%- endcomment -%}}
{{%- liquid
  assign size = size | default: 24
  assign stroke_width = stroke_width | default: 2
-%}}
<svg
  xmlns="http://www.w3.org/2000/svg"
  width="{{{{ size }}}}"
  height="{{{{ size }}}}"
  viewBox="0 0 24 24"
  fill="none"
  stroke="currentColor"
  stroke-width="{{{{ stroke_width }}}}"
  stroke-linecap="round"
  stroke-linejoin="round"
  class="icon icon-{name}{{% if class %}} {{{{ class }}}}{{% endif %}}"
  aria-hidden="true"
>
{markup}
</svg>
"#
    )
}
