#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const PRODUCT_LINE: &str = "dotnet aspnet-codegenerator controller --controllerName ProductController --model mess_management.Models.Product --dataContext mess_management.Models.AppDbContext --useAsyncActions --useDefaultLayout --force --relativeFolderPath Controllers";
pub const ORDER_LINE: &str = "dotnet aspnet-codegenerator controller --controllerName OrderController --model mess_management.Models.Order --dataContext mess_management.Models.AppDbContext --useAsyncActions --useDefaultLayout --force --relativeFolderPath Controllers";

pub struct TestEnv {
    _tmp: TempDir,
    pub project: PathBuf,
}

impl TestEnv {
    /// Project root without a `Models` directory.
    pub fn empty() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let project = tmp.path().join("project");
        fs::create_dir_all(&project).expect("create project dir");
        Self { _tmp: tmp, project }
    }

    pub fn with_models(files: &[&str]) -> Self {
        let env = Self::empty();
        let models = env.project.join("Models");
        fs::create_dir_all(&models).expect("create Models dir");
        for f in files {
            fs::write(models.join(f), "namespace mess_management.Models;\n")
                .expect("write model file");
        }
        env
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("scaffold-controllers");
        cmd.current_dir(&self.project).env_remove("RUST_LOG");
        cmd
    }

    pub fn stdout(&self, args: &[&str]) -> String {
        let out = self
            .cmd()
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).expect("utf8 stdout")
    }
}
