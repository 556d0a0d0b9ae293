use anyhow::{Result, bail};
use log::{debug, trace};
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use crate::types::RouteTree;
use routelens_core::{ParseCache, ResolveCache, resolve_routing_module, routes_in_file};

/// Builds the flat, fully-qualified route list reachable from the root
/// routing-configuration file, in depth-first pre-order matching source
/// declaration order at every level.
///
/// A `loadChildren` reference that resolves to no file on disk is a normal
/// leaf condition and stops recursion at that branch. A reference that
/// resolves back onto a file already on the active traversal path is a
/// configuration cycle and fails the run.
pub fn build_route_tree(
    root_file: &Path,
    project_root: &Path,
    app_root: &Path,
    parse_cache: &mut ParseCache,
    resolve_cache: &mut ResolveCache,
) -> Result<RouteTree> {
    debug!("Building route tree from {}", root_file.display());
    let mut tree = RouteTree::default();
    let mut visiting: HashSet<PathBuf> = HashSet::new();
    walk(
        root_file,
        "",
        0,
        project_root,
        app_root,
        parse_cache,
        resolve_cache,
        &mut visiting,
        &mut tree,
    )?;
    debug!("Route tree yielded {} qualified routes", tree.routes.len());
    Ok(tree)
}

#[allow(clippy::too_many_arguments)]
fn walk(
    file: &Path,
    parent_path: &str,
    depth: usize,
    project_root: &Path,
    app_root: &Path,
    parse_cache: &mut ParseCache,
    resolve_cache: &mut ResolveCache,
    visiting: &mut HashSet<PathBuf>,
    tree: &mut RouteTree,
) -> Result<()> {
    let file_buf = file.to_path_buf();
    if !visiting.insert(file_buf.clone()) {
        bail!(
            "Circular routing configuration: {} is already on the traversal path",
            file.display()
        );
    }

    let indent = "  ".repeat(depth);
    let rel = file.strip_prefix(project_root).unwrap_or(file);
    tree.trace.push(format!("{indent}Scanning: {}", rel.display()));
    trace!("Scanning routing module: {}", file.display());

    let declarations = routes_in_file(file, parse_cache)?;
    for decl in &declarations {
        let qualified = if parent_path.is_empty() {
            decl.path.clone()
        } else {
            format!("{parent_path}/{}", decl.path)
        };
        tree.trace.push(format!("{indent}  ├─ {} -> {}", decl.path, qualified));
        tree.routes.push(qualified.clone());

        if let Some(reference) = &decl.load_children {
            match resolve_routing_module(
                reference,
                &decl.source_file,
                project_root,
                app_root,
                resolve_cache,
            ) {
                Some(child_file) => {
                    tree.trace.push(format!("{indent}  │  └─ Loading children..."));
                    walk(
                        &child_file,
                        &qualified,
                        depth + 1,
                        project_root,
                        app_root,
                        parse_cache,
                        resolve_cache,
                        visiting,
                        tree,
                    )?;
                }
                None => {
                    trace!("No child routing module for '{}', stopping at leaf", reference);
                }
            }
        }
    }

    visiting.remove(&file_buf);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
        let file_path = dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    fn build(project_root: &Path, root_file: &Path) -> Result<RouteTree> {
        let app_root = project_root.join("src/app");
        let mut parse_cache = ParseCache::new();
        let mut resolve_cache = ResolveCache::new();
        build_route_tree(root_file, project_root, &app_root, &mut parse_cache, &mut resolve_cache)
    }

    #[test]
    fn test_lazy_children_are_qualified_by_the_parent() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let root_file = create_test_file(
            root,
            "src/app/app-routing.module.ts",
            r#"
            const routes: Routes = [
                { path: 'dashboard', component: DashboardComponent },
                { path: 'admin', loadChildren: () => import('./admin/admin.module').then(m => m.AdminModule) },
            ];
            "#,
        );
        create_test_file(
            root,
            "src/app/admin/admin-routing.module.ts",
            "const routes: Routes = [{ path: 'users', component: UsersComponent }];",
        );

        let tree = build(root, &root_file).unwrap();
        assert_eq!(tree.routes, vec!["dashboard", "admin", "admin/users"]);
    }

    #[test]
    fn test_unresolvable_load_children_stops_recursion() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let root_file = create_test_file(
            root,
            "src/app/app-routing.module.ts",
            r#"
            const routes = [
                { path: 'reports', loadChildren: () => import('./missing/missing.module') },
                { path: 'home', component: HomeComponent },
            ];
            "#,
        );

        let tree = build(root, &root_file).unwrap();
        assert_eq!(tree.routes, vec!["reports", "home"]);
    }

    #[test]
    fn test_empty_parent_join() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let root_file = create_test_file(
            root,
            "src/app/app-routing.module.ts",
            r#"
            const routes = [
                { path: '', loadChildren: () => import('./shell/shell.module') },
            ];
            "#,
        );
        create_test_file(
            root,
            "src/app/shell/shell-routing.module.ts",
            "const routes = [{ path: 'inbox', component: InboxComponent }];",
        );

        let tree = build(root, &root_file).unwrap();
        // An empty ancestor path contributes no separator.
        assert_eq!(tree.routes, vec!["", "inbox"]);
    }

    #[test]
    fn test_three_level_hierarchy() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let root_file = create_test_file(
            root,
            "src/app/app-routing.module.ts",
            "const routes = [{ path: 'a', loadChildren: () => import('./a/a.module') }];",
        );
        create_test_file(
            root,
            "src/app/a/a-routing.module.ts",
            "const routes = [{ path: 'b', loadChildren: () => import('./b/b.module') }];",
        );
        create_test_file(
            root,
            "src/app/a/b/b-routing.module.ts",
            "const routes = [{ path: 'c', component: CComponent }];",
        );

        let tree = build(root, &root_file).unwrap();
        assert_eq!(tree.routes, vec!["a", "a/b", "a/b/c"]);
    }

    #[test]
    fn test_cycle_fails_fast() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let root_file = create_test_file(
            root,
            "src/app/app-routing.module.ts",
            "const routes = [{ path: 'loop', loadChildren: () => import('./loop/loop.module') }];",
        );
        create_test_file(
            root,
            "src/app/loop/loop-routing.module.ts",
            // Resolves straight back to the root routing module.
            "const routes = [{ path: 'again', loadChildren: () => import('../app.module') }];",
        );

        let err = build(root, &root_file).unwrap_err();
        assert!(err.to_string().contains("Circular routing configuration"));
    }

    #[test]
    fn test_sibling_branches_may_share_a_module() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let root_file = create_test_file(
            root,
            "src/app/app-routing.module.ts",
            r#"
            const routes = [
                { path: 'first', loadChildren: () => import('./shared/shared.module') },
                { path: 'second', loadChildren: () => import('./shared/shared.module') },
            ];
            "#,
        );
        create_test_file(
            root,
            "src/app/shared/shared-routing.module.ts",
            "const routes = [{ path: 'view', component: ViewComponent }];",
        );

        // The same module on two sibling branches is not a cycle; each branch
        // qualifies it under its own parent.
        let tree = build(root, &root_file).unwrap();
        assert_eq!(tree.routes, vec!["first", "first/view", "second", "second/view"]);
    }

    #[test]
    fn test_trace_mentions_every_scanned_module() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let root_file = create_test_file(
            root,
            "src/app/app-routing.module.ts",
            "const routes = [{ path: 'x', loadChildren: () => import('./x/x.module') }];",
        );
        create_test_file(
            root,
            "src/app/x/x-routing.module.ts",
            "const routes = [{ path: 'y' }];",
        );

        let tree = build(root, &root_file).unwrap();
        let trace = tree.trace.join("\n");
        assert!(trace.contains("app-routing.module.ts"));
        assert!(trace.contains("x-routing.module.ts"));
        assert!(trace.contains("x -> x"));
        assert!(trace.contains("y -> x/y"));
    }
}
