//! Astro scaffolding steps

use super::plan::{CommandStep, PlanStep, TemplateFile, Workdir};
use super::templates::{self, render, tidy};
use crate::config::PackageManager;
use crate::resolve::ResolvedConfig;

const CREATE_FLAGS: &[&str] = &[
    "--template",
    "minimal",
    "--install",
    "--no-git",
    "--skip-houston",
    "--yes",
];

pub(crate) fn steps(config: &ResolvedConfig, pm: PackageManager) -> Vec<PlanStep> {
    let mut steps = vec![PlanStep::Run(CommandStep::new(
        "Create Astro project",
        pm.create("astro@latest", config.project_name(), CREATE_FLAGS),
        Workdir::Parent,
    ))];

    let run = |description: &str, cmd| PlanStep::Run(CommandStep::new(description, cmd, Workdir::Project));

    if config.use_tailwind() {
        steps.push(run("Add Tailwind CSS", pm.exec("astro", &["add", "tailwind", "--yes"])));
    }

    // CSS lines appended to the Tailwind stylesheet, imports for the plain one
    let mut plugins: Vec<&str> = Vec::new();
    let mut css_imports: Vec<&str> = Vec::new();

    match config.ui_library() {
        "daisyui" => {
            steps.push(run("Install daisyUI", pm.add(&["daisyui@latest"], true)));
            plugins.push("@plugin \"daisyui\";");
        }
        "flowbite" => {
            steps.push(run("Install Flowbite", pm.add(&["flowbite"], false)));
            plugins.push("@plugin \"flowbite/plugin\";");
            plugins.push("@source \"../../node_modules/flowbite\";");
        }
        "shadcn" => {
            steps.push(run("Add React islands", pm.exec("astro", &["add", "react", "--yes"])));
            steps.push(run(
                "Initialize shadcn/ui",
                pm.exec("shadcn@latest", &["init", "--defaults", "--yes"]),
            ));
        }
        "bootstrap" => {
            steps.push(run("Install Bootstrap", pm.add(&["bootstrap"], false)));
            css_imports.push("@import \"bootstrap/dist/css/bootstrap.min.css\";");
        }
        "picocss" => {
            steps.push(run("Install Pico CSS", pm.add(&["@picocss/pico"], false)));
            css_imports.push("@import \"@picocss/pico\";");
        }
        _ => {}
    }

    match config.database() {
        "astrodb" => steps.push(run("Add Astro DB", pm.exec("astro", &["add", "db", "--yes"]))),
        "supabase" => steps.push(run(
            "Install Supabase client",
            pm.add(&["@supabase/supabase-js"], false),
        )),
        _ => {}
    }

    let stylesheet = if config.use_tailwind() {
        let plugins = plugins.join("\n");
        render(templates::ASTRO_TAILWIND_CSS, &[("plugins", plugins.as_str())])
    } else {
        let imports = css_imports.join("\n");
        render(templates::ASTRO_PLAIN_CSS, &[("imports", imports.as_str())])
    };
    steps.push(PlanStep::Write(TemplateFile::new(
        "src/styles/global.css",
        tidy(&stylesheet),
    )));

    steps.push(PlanStep::Write(TemplateFile::new(
        "src/pages/index.astro",
        welcome_page(config),
    )));

    // JavaScript projects keep editor checks without strict typing
    let preset = if config.is_typescript() { "strict" } else { "base" };
    steps.push(PlanStep::Write(TemplateFile::new(
        "tsconfig.json",
        render(templates::ASTRO_TSCONFIG, &[("preset", preset)]),
    )));

    steps
}

fn welcome_page(config: &ResolvedConfig) -> String {
    let catalog = config.framework().catalog();
    let (main_class, heading_class) = match config.ui_library() {
        "daisyui" => ("hero min-h-screen", "text-5xl font-bold"),
        "bootstrap" => ("container py-5", "display-4"),
        "picocss" => ("container", ""),
        _ if config.use_tailwind() => ("mx-auto max-w-2xl p-8", "text-4xl font-bold"),
        _ => ("", ""),
    };
    let styling = if config.use_tailwind() {
        "Tailwind CSS"
    } else {
        "plain CSS"
    };

    let script = if config.is_typescript() {
        format!("const title: string = \"{}\";", config.project_name())
    } else {
        format!("const title = \"{}\";", config.project_name())
    };

    tidy(&render(
        templates::ASTRO_INDEX,
        &[
            ("script", script.as_str()),
            ("main_class", main_class),
            ("heading_class", heading_class),
            ("styling", styling),
            ("library", catalog.library_label(config.ui_library())),
        ],
    ))
}
