use crate::core::{DependencyMode, MainProject, ProjectRecord, SolutionFormat};

/// Project type GUID Visual Studio uses for Visual C++ projects.
pub const VC_PROJECT_TYPE: &str = "{8BC9CEB8-8B4A-11D0-8D11-00A0C91F3942}";

pub const CONFIGURATIONS: [&str; 2] = ["Debug|Win32", "Release|Win32"];

pub const DEFAULT_PROJECT_EXTENSION: &str = "vcproj";

const BOM: char = '\u{FEFF}';
const EOL: &str = "\r\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionOptions {
    pub format: SolutionFormat,
    pub dependency_mode: DependencyMode,
    pub project_extension: String,
}

impl Default for SolutionOptions {
    fn default() -> Self {
        Self {
            format: SolutionFormat::default(),
            dependency_mode: DependencyMode::default(),
            project_extension: DEFAULT_PROJECT_EXTENSION.to_string(),
        }
    }
}

/// Builds the `.sln` text. Project blocks follow `projects` order, after the
/// main project; no I/O happens here.
pub fn assemble(
    projects: &[ProjectRecord],
    main_project: &MainProject,
    options: &SolutionOptions,
) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(16 + projects.len() * 8);

    // 標頭：BOM 獨佔一行，接著兩行固定的版本字串
    lines.push(BOM.to_string());
    lines.push(options.format.format_version_line().to_string());
    lines.push(options.format.product_line().to_string());

    push_project_block(
        &mut lines,
        &main_project.name,
        &main_project.path,
        main_project.identifier.as_str(),
        None,
    );

    let dependency = match options.dependency_mode {
        DependencyMode::None => None,
        DependencyMode::MainProject => Some(main_project.identifier.as_str()),
    };

    for project in projects {
        let path = format!("{}.{}", project.name, options.project_extension);
        push_project_block(
            &mut lines,
            &project.name,
            &path,
            project.identifier.as_str(),
            dependency,
        );
    }

    lines.push("Global".to_string());

    lines.push("\tGlobalSection(SolutionConfigurationPlatforms) = preSolution".to_string());
    for config in CONFIGURATIONS {
        lines.push(format!("\t\t{config} = {config}"));
    }
    lines.push("\tEndGlobalSection".to_string());

    lines.push("\tGlobalSection(ProjectConfigurationPlatforms) = postSolution".to_string());
    let identifiers = std::iter::once(main_project.identifier.as_str())
        .chain(projects.iter().map(|p| p.identifier.as_str()));
    for id in identifiers {
        for config in CONFIGURATIONS {
            lines.push(format!("\t\t{id}.{config}.ActiveCfg = {config}"));
            lines.push(format!("\t\t{id}.{config}.Build.0 = {config}"));
        }
    }
    lines.push("\tEndGlobalSection".to_string());

    lines.push("\tGlobalSection(SolutionProperties) = preSolution".to_string());
    lines.push("\t\tHideSolutionNode = FALSE".to_string());
    lines.push("\tEndGlobalSection".to_string());

    lines.push("EndGlobal".to_string());

    let mut text = lines.join(EOL);
    text.push_str(EOL);
    text
}

fn push_project_block(
    lines: &mut Vec<String>,
    name: &str,
    path: &str,
    identifier: &str,
    depends_on: Option<&str>,
) {
    lines.push(format!(
        "Project(\"{VC_PROJECT_TYPE}\") = \"{name}\", \"{path}\", \"{identifier}\""
    ));
    if let Some(dep) = depends_on {
        lines.push("\tProjectSection(ProjectDependencies) = postProject".to_string());
        lines.push(format!("\t\t{dep} = {dep}"));
        lines.push("\tEndProjectSection".to_string());
    }
    lines.push("EndProject".to_string());
}
