use crate::core::enumerator::enumerate_sources;
use crate::core::solution::{assemble, SolutionOptions};
use crate::core::template::render;
use crate::core::{FileSystem, IdentifierSource, ProjectRecord, RunSummary};
use crate::config::settings::GeneratorSettings;
use crate::utils::error::{GenError, Result};
use crate::utils::monitor::RunMonitor;
use std::cell::Cell;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationState {
    Init,
    EnsureOutputDir,
    Enumerate,
    GenerateProjects,
    AssembleSolution,
    Done,
    Failed,
}

pub struct SolutionGenerator<F: FileSystem, I: IdentifierSource> {
    fs: F,
    identifiers: I,
    settings: GeneratorSettings,
    monitor: RunMonitor,
    state: Cell<GenerationState>,
}

impl<F: FileSystem, I: IdentifierSource> SolutionGenerator<F, I> {
    pub fn new(fs: F, identifiers: I, settings: GeneratorSettings) -> Self {
        Self::new_with_monitoring(fs, identifiers, settings, false)
    }

    pub fn new_with_monitoring(
        fs: F,
        identifiers: I,
        settings: GeneratorSettings,
        monitor_enabled: bool,
    ) -> Self {
        Self {
            fs,
            identifiers,
            settings,
            monitor: RunMonitor::new(monitor_enabled),
            state: Cell::new(GenerationState::Init),
        }
    }

    pub fn state(&self) -> GenerationState {
        self.state.get()
    }

    pub fn file_system(&self) -> &F {
        &self.fs
    }

    /// 執行完整的生成流程；任何錯誤都會中止，已寫入的檔案保留在磁碟上
    pub fn run(&self) -> Result<RunSummary> {
        tracing::info!(
            "🚀 Generating {} from {}",
            self.solution_path().display(),
            self.settings.source_dir.display()
        );

        match self.run_phases() {
            Ok(summary) => {
                self.transition(GenerationState::Done);
                self.monitor.log_final_stats();
                Ok(summary)
            }
            Err(e) => {
                tracing::error!("❌ Generation failed in {:?}: {}", self.state(), e);
                self.transition(GenerationState::Failed);
                Err(e)
            }
        }
    }

    fn run_phases(&self) -> Result<RunSummary> {
        self.transition(GenerationState::EnsureOutputDir);
        let output_dir = &self.settings.output_dir;
        self.fs
            .create_dir_all(output_dir)
            .map_err(|source| GenError::WriteError {
                path: output_dir.clone(),
                source,
            })?;
        self.monitor.log_phase("ensure_output_dir");

        self.transition(GenerationState::Enumerate);
        let names = enumerate_sources(
            &self.fs,
            &self.settings.source_dir,
            &self.settings.source_extension,
        )?;
        tracing::info!("Found {} test sources", names.len());
        self.monitor.log_phase("enumerate");

        self.transition(GenerationState::GenerateProjects);
        let mut projects = Vec::with_capacity(names.len());
        let mut project_files = Vec::with_capacity(names.len());
        for name in names {
            let (record, path) = self.generate_project(name)?;
            projects.push(record);
            project_files.push(path);
        }
        self.monitor.log_phase("generate_projects");

        self.transition(GenerationState::AssembleSolution);
        let options = SolutionOptions {
            format: self.settings.format,
            dependency_mode: self.settings.dependency_mode,
            project_extension: self.settings.project_extension.clone(),
        };
        let solution = assemble(&projects, &self.settings.main_project, &options);
        let solution_path = self.solution_path();
        self.write(&solution_path, &solution)?;
        tracing::info!(
            "✅ Wrote {} ({} projects)",
            solution_path.display(),
            projects.len()
        );
        self.monitor.log_phase("assemble_solution");

        Ok(RunSummary {
            solution_path,
            project_files,
            projects,
            dependency_mode: self.settings.dependency_mode,
            format: self.settings.format,
        })
    }

    fn generate_project(&self, name: String) -> Result<(ProjectRecord, PathBuf)> {
        let identifier = self.identifiers.generate()?;
        let contents = render(
            &self.fs,
            &self.settings.template_path,
            &self.settings.placeholders,
            &name,
            &identifier,
        )?;

        let path = self.project_path(&name);
        self.write(&path, &contents)?;
        tracing::debug!("Wrote {} {}", path.display(), identifier);

        Ok((ProjectRecord { name, identifier }, path))
    }

    pub fn project_path(&self, name: &str) -> PathBuf {
        self.settings
            .output_dir
            .join(format!("{}.{}", name, self.settings.project_extension))
    }

    pub fn solution_path(&self) -> PathBuf {
        self.settings
            .output_dir
            .join(format!("{}.sln", self.settings.suite_name))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        self.fs
            .write(path, contents)
            .map_err(|source| GenError::WriteError {
                path: path.to_path_buf(),
                source,
            })
    }

    fn transition(&self, next: GenerationState) {
        tracing::debug!("State {:?} -> {:?}", self.state.get(), next);
        self.state.set(next);
    }
}
