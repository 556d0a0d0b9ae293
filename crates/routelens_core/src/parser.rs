use anyhow::{Context, Result};
use log::{debug, trace};
use oxc_allocator::Allocator;
use oxc_ast::ast::*;
use oxc_parser::{Parser as OxcParser, ParserReturn};
use oxc_span::SourceType;
use std::{fs, path::Path};

use crate::types::{ParseCache, RouteDeclaration};

/// Extracts the ordered route declarations from one routing-configuration
/// file. Results are memoized per file path, so a module reachable through
/// several branches of the route tree is read and parsed exactly once.
pub fn routes_in_file(file: &Path, cache: &mut ParseCache) -> Result<Vec<RouteDeclaration>> {
    let file_buf = file.to_path_buf();
    if let Some(v) = cache.get(&file_buf) {
        trace!("Cache hit for routes: {}", file.display());
        return Ok(v.clone());
    }
    trace!("Parsing routing module: {}", file.display());
    let src =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;

    let routes = routes_in_source(&src, file);
    debug!("Found {} route declarations in {}", routes.len(), file.display());
    cache.insert(file_buf, routes.clone());
    Ok(routes)
}

/// Parses routing-module source text and collects every route object literal
/// (an object carrying a string `path` property) in source order.
pub fn routes_in_source(src: &str, file: &Path) -> Vec<RouteDeclaration> {
    let st = SourceType::default().with_typescript(true);
    let allocator = Allocator::default();
    let ParserReturn { program, .. } = OxcParser::new(&allocator, src, st).parse();

    let mut routes: Vec<RouteDeclaration> = Vec::new();

    for stmt in &program.body {
        match stmt {
            Statement::VariableDeclaration(vd) => {
                // const routes: Routes = [ ... ];
                for decl in &vd.declarations {
                    if let Some(init) = &decl.init {
                        collect_route_objects(init, file, &mut routes);
                    }
                }
            }
            Statement::ExpressionStatement(es) => {
                collect_route_objects(&es.expression, file, &mut routes);
            }
            Statement::ExportNamedDeclaration(ed) => {
                // export const routes: Routes = [ ... ];
                if let Some(Declaration::VariableDeclaration(vd)) = &ed.declaration {
                    for decl in &vd.declarations {
                        if let Some(init) = &decl.init {
                            collect_route_objects(init, file, &mut routes);
                        }
                    }
                }
            }
            _ => {}
        }
    }

    routes
}

/// Recursively walks an expression collecting route object literals in
/// pre-order: a parent route is recorded before the routes nested in its
/// `children` array.
fn collect_route_objects(expr: &Expression, file: &Path, routes: &mut Vec<RouteDeclaration>) {
    match expr {
        Expression::ObjectExpression(oe) => {
            if let Some(decl) = route_declaration(oe, file) {
                trace!("Found route declaration: '{}'", decl.path);
                routes.push(decl);
            }
            // Property values may hold further route objects (`children`).
            for prop in &oe.properties {
                if let Some(p) = prop.as_property() {
                    collect_route_objects(&p.value, file, routes);
                }
            }
        }
        Expression::ArrayExpression(ae) => {
            for elem in &ae.elements {
                if let Some(e) = elem.as_expression() {
                    collect_route_objects(e, file, routes);
                }
            }
        }
        Expression::CallExpression(ce) => {
            // Route arrays passed inline, e.g. RouterModule.forChild([ ... ])
            for arg in &ce.arguments {
                if let Some(e) = arg.as_expression() {
                    collect_route_objects(e, file, routes);
                }
            }
            collect_route_objects(&ce.callee, file, routes);
        }
        Expression::ConditionalExpression(ce) => {
            collect_route_objects(&ce.test, file, routes);
            collect_route_objects(&ce.consequent, file, routes);
            collect_route_objects(&ce.alternate, file, routes);
        }
        Expression::AssignmentExpression(ae) => {
            collect_route_objects(&ae.right, file, routes);
        }
        Expression::ParenthesizedExpression(pe) => {
            collect_route_objects(&pe.expression, file, routes);
        }
        Expression::TSAsExpression(tas) => {
            // [ ... ] as Routes
            collect_route_objects(&tas.expression, file, routes);
        }
        _ => {
            // Other expression kinds cannot contain route object literals.
        }
    }
}

/// Reads a route declaration out of an object literal, if it is one. An
/// object qualifies when it carries a `path` property with a string-literal
/// value; a `loadChildren` property contributes the referenced child module
/// when a literal dynamic `import()` is reachable inside its value.
fn route_declaration(oe: &ObjectExpression, file: &Path) -> Option<RouteDeclaration> {
    let mut path: Option<String> = None;
    let mut load_children: Option<String> = None;

    for prop in &oe.properties {
        let Some(p) = prop.as_property() else { continue };
        let Some(key) = property_name(&p.key) else { continue };
        match key {
            "path" => {
                if let Expression::StringLiteral(sl) = &p.value {
                    path = Some(sl.value.to_string());
                }
            }
            "loadChildren" => {
                load_children = first_dynamic_import(&p.value);
            }
            _ => {}
        }
    }

    path.map(|path| RouteDeclaration { path, load_children, source_file: file.to_path_buf() })
}

fn property_name<'a>(key: &PropertyKey<'a>) -> Option<&'a str> {
    match key {
        PropertyKey::StaticIdentifier(ident) => Some(ident.name.as_str()),
        PropertyKey::StringLiteral(sl) => Some(sl.value.as_str()),
        _ => None,
    }
}

/// Finds the first dynamic `import('...')` string literal reachable inside a
/// `loadChildren` value, looking through arrow bodies and promise chains like
/// `() => import('./x/x.module').then(m => m.XModule)`.
fn first_dynamic_import(expr: &Expression) -> Option<String> {
    match expr {
        Expression::ImportExpression(ie) => {
            if let Expression::StringLiteral(sl) = &ie.source {
                trace!("Found loadChildren import: '{}'", sl.value);
                return Some(sl.value.to_string());
            }
            None
        }
        Expression::ArrowFunctionExpression(af) => {
            for stmt in &af.body.statements {
                let found = match stmt {
                    Statement::ExpressionStatement(es) => first_dynamic_import(&es.expression),
                    Statement::ReturnStatement(rs) => {
                        rs.argument.as_ref().and_then(first_dynamic_import)
                    }
                    _ => None,
                };
                if found.is_some() {
                    return found;
                }
            }
            None
        }
        Expression::CallExpression(ce) => {
            // import('./x').then(...): the import sits in the callee chain.
            if let Some(found) = first_dynamic_import(&ce.callee) {
                return Some(found);
            }
            for arg in &ce.arguments {
                if let Some(e) = arg.as_expression()
                    && let Some(found) = first_dynamic_import(e)
                {
                    return Some(found);
                }
            }
            None
        }
        Expression::StaticMemberExpression(me) => first_dynamic_import(&me.object),
        Expression::ParenthesizedExpression(pe) => first_dynamic_import(&pe.expression),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
        let file_path = dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    #[test]
    fn test_paths_in_source_order() {
        let src = r#"
            import { Routes } from '@angular/router';
            const routes: Routes = [
                { path: 'dashboard', component: DashboardComponent },
                { path: 'reports', component: ReportsComponent },
            ];
        "#;
        let routes = routes_in_source(src, Path::new("app-routing.module.ts"));
        let paths: Vec<&str> = routes.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["dashboard", "reports"]);
        assert!(routes.iter().all(|r| r.load_children.is_none()));
    }

    #[test]
    fn test_load_children_with_promise_chain() {
        let src = r#"
            const routes: Routes = [
                {
                    path: 'admin',
                    loadChildren: () => import('./admin/admin.module').then(m => m.AdminModule)
                },
            ];
        "#;
        let routes = routes_in_source(src, Path::new("app-routing.module.ts"));
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].path, "admin");
        assert_eq!(routes[0].load_children.as_deref(), Some("./admin/admin.module"));
    }

    #[test]
    fn test_load_children_without_then() {
        let src = r#"
            const routes = [
                { path: 'lazy', loadChildren: () => import('./lazy/lazy.module') },
            ];
        "#;
        let routes = routes_in_source(src, Path::new("routes.ts"));
        assert_eq!(routes[0].load_children.as_deref(), Some("./lazy/lazy.module"));
    }

    #[test]
    fn test_intervening_properties_tolerated() {
        let src = r#"
            const routes = [
                {
                    path: 'settings',
                    canActivate: [AuthGuard],
                    data: { title: 'Settings' },
                    loadChildren: () => import('./settings/settings.module').then(m => m.SettingsModule)
                },
            ];
        "#;
        let routes = routes_in_source(src, Path::new("routes.ts"));
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].path, "settings");
        assert_eq!(routes[0].load_children.as_deref(), Some("./settings/settings.module"));
    }

    #[test]
    fn test_empty_wildcard_and_param_paths_kept() {
        let src = r#"
            const routes = [
                { path: '', redirectTo: 'home', pathMatch: 'full' },
                { path: 'user/:id', component: UserComponent },
                { path: '**', component: NotFoundComponent },
            ];
        "#;
        let routes = routes_in_source(src, Path::new("routes.ts"));
        let paths: Vec<&str> = routes.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["", "user/:id", "**"]);
    }

    #[test]
    fn test_nested_children_extracted_flat_in_preorder() {
        let src = r#"
            const routes = [
                {
                    path: 'parent',
                    component: ParentComponent,
                    children: [
                        { path: 'first', component: FirstComponent },
                        { path: 'second', component: SecondComponent },
                    ]
                },
                { path: 'after', component: AfterComponent },
            ];
        "#;
        let routes = routes_in_source(src, Path::new("routes.ts"));
        let paths: Vec<&str> = routes.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["parent", "first", "second", "after"]);
    }

    #[test]
    fn test_export_const_routes() {
        let src = r#"
            export const routes: Routes = [
                { path: 'exported', component: ExportedComponent },
            ];
        "#;
        let routes = routes_in_source(src, Path::new("routes.ts"));
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].path, "exported");
    }

    #[test]
    fn test_string_literal_key() {
        let src = r#"
            const routes = [
                { 'path': 'quoted', component: QuotedComponent },
            ];
        "#;
        let routes = routes_in_source(src, Path::new("routes.ts"));
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].path, "quoted");
    }

    #[test]
    fn test_non_literal_path_ignored() {
        let src = r#"
            const routes = [
                { path: routeName, component: DynamicComponent },
                { path: `tpl`, component: TplComponent },
                { path: 'literal', component: LiteralComponent },
            ];
        "#;
        let routes = routes_in_source(src, Path::new("routes.ts"));
        let paths: Vec<&str> = routes.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["literal"]);
    }

    #[test]
    fn test_router_config_object_is_not_a_route() {
        let src = r#"
            const routes: Routes = [{ path: 'home', component: HomeComponent }];
            @NgModule({
                imports: [RouterModule.forRoot(routes, { useHash: true })],
                exports: [RouterModule]
            })
            export class AppRoutingModule {}
        "#;
        let routes = routes_in_source(src, Path::new("app-routing.module.ts"));
        let paths: Vec<&str> = routes.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["home"]);
    }

    #[test]
    fn test_source_file_recorded() {
        let src = "const routes = [{ path: 'x' }];";
        let file = Path::new("feature/feature-routing.module.ts");
        let routes = routes_in_source(src, file);
        assert_eq!(routes[0].source_file, file.to_path_buf());
    }

    #[test]
    fn test_cache_single_read() {
        let temp_dir = TempDir::new().unwrap();
        let mut cache = ParseCache::new();
        let file = create_test_file(
            temp_dir.path(),
            "app-routing.module.ts",
            "const routes = [{ path: 'one' }];",
        );

        let first = routes_in_file(&file, &mut cache).unwrap();
        assert_eq!(first.len(), 1);

        // The second lookup must come from the cache, not a re-read.
        fs::write(&file, "const routes = [{ path: 'one' }, { path: 'two' }];").unwrap();
        let second = routes_in_file(&file, &mut cache).unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_unreadable_file_is_fatal() {
        let mut cache = ParseCache::new();
        let result = routes_in_file(Path::new("/nonexistent/app-routing.module.ts"), &mut cache);
        assert!(result.is_err());
    }
}
