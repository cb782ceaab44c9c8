//! Vue scaffolding steps

use super::plan::{CommandStep, PlanStep, TemplateFile, Workdir};
use super::templates::{self, render, tidy};
use crate::config::PackageManager;
use crate::resolve::ResolvedConfig;

pub(crate) fn steps(config: &ResolvedConfig, pm: PackageManager) -> Vec<PlanStep> {
    let ext = if config.is_typescript() { "ts" } else { "js" };
    let flags: &[&str] = if config.is_typescript() {
        &["--ts"]
    } else {
        &["--default"]
    };

    let run = |description: &str, cmd| PlanStep::Run(CommandStep::new(description, cmd, Workdir::Project));

    let mut steps = vec![
        PlanStep::Run(CommandStep::new(
            "Create Vue project",
            pm.create("vue@latest", config.project_name(), flags),
            Workdir::Parent,
        )),
        run("Install dependencies", pm.install_all()),
    ];

    let mut plugins: Vec<&str> = Vec::new();
    let mut imports: Vec<String> = Vec::new();
    let mut uses: Vec<&str> = Vec::new();

    if config.use_tailwind() {
        steps.push(run(
            "Install Tailwind CSS",
            pm.add(&["tailwindcss", "@tailwindcss/vite"], true),
        ));
        steps.push(PlanStep::Write(TemplateFile::new(
            format!("vite.config.{}", ext),
            templates::VUE_VITE_CONFIG,
        )));
    }

    match config.ui_library() {
        "daisyui" => {
            steps.push(run("Install daisyUI", pm.add(&["daisyui@latest"], true)));
            plugins.push("@plugin \"daisyui\";");
        }
        "flowbite" => {
            steps.push(run("Install Flowbite Vue", pm.add(&["flowbite", "flowbite-vue"], false)));
            plugins.push("@plugin \"flowbite/plugin\";");
            plugins.push("@source \"../../node_modules/flowbite-vue\";");
        }
        "shadcn" => {
            steps.push(run(
                "Initialize shadcn-vue",
                pm.exec("shadcn-vue@latest", &["init", "--defaults", "--yes"]),
            ));
        }
        "vuetify" => {
            steps.push(run("Install Vuetify", pm.add(&["vuetify"], false)));
            steps.push(PlanStep::Write(TemplateFile::new(
                format!("src/plugins/vuetify.{}", ext),
                templates::VUE_VUETIFY_PLUGIN,
            )));
            imports.push("import vuetify from \"./plugins/vuetify\";".to_string());
            uses.push("app.use(vuetify);");
        }
        "element-plus" => {
            steps.push(run("Install Element Plus", pm.add(&["element-plus"], false)));
            imports.push("import ElementPlus from \"element-plus\";".to_string());
            imports.push("import \"element-plus/dist/index.css\";".to_string());
            uses.push("app.use(ElementPlus);");
        }
        "naive-ui" => {
            steps.push(run("Install Naive UI", pm.add(&["naive-ui"], false)));
        }
        "primevue" => {
            steps.push(run(
                "Install PrimeVue",
                pm.add(&["primevue", "@primeuix/themes"], false),
            ));
            imports.push("import PrimeVue from \"primevue/config\";".to_string());
            imports.push("import Aura from \"@primeuix/themes/aura\";".to_string());
            uses.push("app.use(PrimeVue, { theme: { preset: Aura } });");
        }
        _ => {}
    }

    if config.database() == "supabase" {
        steps.push(run(
            "Install Supabase client",
            pm.add(&["@supabase/supabase-js"], false),
        ));
    }

    let stylesheet = if config.use_tailwind() {
        let plugins = plugins.join("\n");
        render(templates::VUE_TAILWIND_CSS, &[("plugins", plugins.as_str())])
    } else {
        templates::VUE_PLAIN_CSS.to_string()
    };
    steps.push(PlanStep::Write(TemplateFile::new(
        "src/assets/main.css",
        tidy(&stylesheet),
    )));

    let imports = imports.join("\n");
    let uses = uses.join("\n");
    steps.push(PlanStep::Write(TemplateFile::new(
        format!("src/main.{}", ext),
        tidy(&render(
            templates::VUE_MAIN,
            &[("imports", imports.as_str()), ("uses", uses.as_str())],
        )),
    )));

    steps.push(PlanStep::Write(TemplateFile::new("src/App.vue", app_component(config))));

    steps
}

fn app_component(config: &ResolvedConfig) -> String {
    let catalog = config.framework().catalog();
    let (main_class, heading_class) = match config.ui_library() {
        "daisyui" => ("hero min-h-screen", "text-5xl font-bold"),
        _ if config.use_tailwind() => ("mx-auto max-w-2xl p-8", "text-4xl font-bold"),
        _ => ("", ""),
    };
    let styling = if config.use_tailwind() {
        "Tailwind CSS"
    } else {
        "plain CSS"
    };
    let lang = if config.is_typescript() { " lang=\"ts\"" } else { "" };

    render(
        templates::VUE_APP,
        &[
            ("lang", lang),
            ("project_name", config.project_name()),
            ("main_class", main_class),
            ("heading_class", heading_class),
            ("styling", styling),
            ("library", catalog.library_label(config.ui_library())),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Framework, Language, StylingMode};
    use crate::resolve::{resolve, ProjectRequest};

    fn plan(request: ProjectRequest) -> Vec<PlanStep> {
        steps(&resolve(request).unwrap(), PackageManager::Npm)
    }

    fn file<'a>(steps: &'a [PlanStep], path: &str) -> Option<&'a TemplateFile> {
        steps.iter().find_map(|s| match s {
            PlanStep::Write(f) if f.path.to_str() == Some(path) => Some(f),
            _ => None,
        })
    }

    #[test]
    fn test_js_project_uses_js_extensions() {
        let steps = plan(
            ProjectRequest::new(Framework::Vue)
                .language(Language::Js)
                .styling(StylingMode::Tailwind),
        );
        assert!(file(&steps, "vite.config.js").is_some());
        assert!(file(&steps, "src/main.js").is_some());
        let app = file(&steps, "src/App.vue").unwrap();
        assert!(app.contents.contains("<script setup>"));
    }

    #[test]
    fn test_plain_project_has_no_vite_patch() {
        let steps = plan(ProjectRequest::new(Framework::Vue).styling(StylingMode::Plain));
        assert!(file(&steps, "vite.config.ts").is_none());
        assert!(file(&steps, "src/assets/main.css")
            .unwrap()
            .contents
            .contains("font-family"));
    }

    #[test]
    fn test_vuetify_registers_plugin() {
        let steps = plan(ProjectRequest::new(Framework::Vue).ui_library("vuetify"));
        assert!(file(&steps, "src/plugins/vuetify.ts").is_some());
        let main = file(&steps, "src/main.ts").unwrap();
        assert!(main.contents.contains("app.use(vuetify);"));
        assert!(!main.contents.contains("{{"));
    }

    #[test]
    fn test_app_component_keeps_vue_interpolation() {
        let steps = plan(ProjectRequest::new(Framework::Vue).project_name("shop"));
        let app = file(&steps, "src/App.vue").unwrap();
        assert!(app.contents.contains("const name = \"shop\";"));
        assert!(app.contents.contains("{{ name }}"));
        assert!(app.contents.contains("lang=\"ts\""));
    }
}
