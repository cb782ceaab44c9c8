//! Embedded starter templates

pub const ASTRO_INDEX: &str = include_str!("../../templates/astro/index.astro");
pub const ASTRO_TAILWIND_CSS: &str = include_str!("../../templates/astro/tailwind.css");
pub const ASTRO_PLAIN_CSS: &str = include_str!("../../templates/astro/plain.css");
pub const ASTRO_TSCONFIG: &str = include_str!("../../templates/astro/tsconfig.json");

pub const VUE_APP: &str = include_str!("../../templates/vue/App.vue");
pub const VUE_MAIN: &str = include_str!("../../templates/vue/main");
pub const VUE_TAILWIND_CSS: &str = include_str!("../../templates/vue/tailwind.css");
pub const VUE_PLAIN_CSS: &str = include_str!("../../templates/vue/plain.css");
pub const VUE_VITE_CONFIG: &str = include_str!("../../templates/vue/vite.config");
pub const VUE_VUETIFY_PLUGIN: &str = include_str!("../../templates/vue/vuetify");

/// Replace `{{key}}` placeholders. Unknown placeholders are left untouched.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in vars {
        out = out.replace(&format!("{{{{{}}}}}", key), value);
    }
    out
}

/// Drop lines left empty by placeholders that rendered to nothing
pub fn tidy(rendered: &str) -> String {
    let mut out = String::with_capacity(rendered.len());
    let mut previous_blank = false;
    for line in rendered.lines() {
        let blank = line.trim().is_empty();
        if blank && previous_blank {
            continue;
        }
        out.push_str(line);
        out.push('\n');
        previous_blank = blank;
    }
    out
}
