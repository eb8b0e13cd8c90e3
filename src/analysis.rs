// File/Package aggregation
//
// Folds per-file extraction results into per-package views. Pure and
// deterministic: every collection here is ordered.

use crate::extractors::base::{Construct, ConstructKind, FileAnalysis};
use crate::utils::paths::unix_parent_dir;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// All constructs sharing one declared package name
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackageAnalysis {
    pub package_name: String,
    /// Directory of the lexicographically first file, `.` for the root
    pub path: String,
    pub files: BTreeSet<String>,
    pub constructs_by_kind: BTreeMap<ConstructKind, Vec<Construct>>,
    /// Subset of `constructs_by_kind` with `exported == true`
    pub exported_only_by_kind: BTreeMap<ConstructKind, Vec<Construct>>,
    /// Count of all constructs per kind
    pub summary: BTreeMap<ConstructKind, usize>,
}

impl PackageAnalysis {
    fn new(package_name: &str) -> Self {
        Self {
            package_name: package_name.to_string(),
            ..Default::default()
        }
    }

    fn add_file(&mut self, file: &FileAnalysis) {
        self.files.insert(file.file_path.clone());
        if let Some(first) = self.files.iter().next() {
            self.path = unix_parent_dir(first).to_string();
        }

        for construct in &file.constructs {
            self.constructs_by_kind
                .entry(construct.kind)
                .or_default()
                .push(construct.clone());
            if construct.exported {
                self.exported_only_by_kind
                    .entry(construct.kind)
                    .or_default()
                    .push(construct.clone());
            }
            *self.summary.entry(construct.kind).or_insert(0) += 1;
        }
    }

    /// View selected by the visibility flag
    pub fn view(&self, include_non_exported: bool) -> &BTreeMap<ConstructKind, Vec<Construct>> {
        if include_non_exported {
            &self.constructs_by_kind
        } else {
            &self.exported_only_by_kind
        }
    }

    pub fn construct_count(&self) -> usize {
        self.summary.values().sum()
    }
}

/// Group file analyses by declared package name
///
/// Empty input yields an empty map.
pub fn aggregate_packages(files: &[FileAnalysis]) -> BTreeMap<String, PackageAnalysis> {
    let mut packages: BTreeMap<String, PackageAnalysis> = BTreeMap::new();
    for file in files {
        packages
            .entry(file.package_name.clone())
            .or_insert_with(|| PackageAnalysis::new(&file.package_name))
            .add_file(file);
    }
    packages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::ExtractorManager;

    fn analyze(path: &str, source: &str) -> FileAnalysis {
        ExtractorManager::new().analyze_file(path, source).unwrap()
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_packages(&[]).is_empty());
    }

    #[test]
    fn test_files_sharing_a_package_are_merged() {
        let files = vec![
            analyze(
                "store/store.go",
                "package store\n\ntype Store struct{}\n\nfunc New() *Store { return nil }\n",
            ),
            analyze(
                "store/cache.go",
                "package store\n\nvar hits int\n\nfunc (s *Store) Get(key string) string { return \"\" }\n",
            ),
            analyze("main.go", "package main\n\nfunc main() {}\n"),
        ];

        let packages = aggregate_packages(&files);
        assert_eq!(
            packages.keys().collect::<Vec<_>>(),
            vec!["main", "store"]
        );

        let store = &packages["store"];
        assert_eq!(store.path, "store");
        assert_eq!(
            store.files.iter().collect::<Vec<_>>(),
            vec!["store/cache.go", "store/store.go"]
        );
        assert_eq!(store.construct_count(), 4);
        assert_eq!(store.summary[&ConstructKind::Var], 1);
        assert_eq!(store.summary[&ConstructKind::Method], 1);

        assert_eq!(packages["main"].path, ".");
    }

    #[test]
    fn test_exported_view_is_subset() {
        let files = vec![analyze(
            "util/util.go",
            "package util\n\nconst Max = 10\nconst min = 1\n\nfunc Clamp(v int) int { return v }\nfunc helper() {}\n",
        )];
        let util = &aggregate_packages(&files)["util"];

        for (kind, exported) in &util.exported_only_by_kind {
            let all = &util.constructs_by_kind[kind];
            assert!(exported.iter().all(|c| c.exported && all.contains(c)));
        }
        assert_eq!(util.view(false)[&ConstructKind::Const].len(), 1);
        assert_eq!(util.view(true)[&ConstructKind::Const].len(), 2);
        assert_eq!(util.view(false)[&ConstructKind::Func][0].name, "Clamp");
    }
}
