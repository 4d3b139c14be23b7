//! Static navigation tree. Configuration, not state: built once and borrowed
//! by the side menu and the breadcrumb for the whole session.

use contracts::navigation::MenuEntry;
use once_cell::sync::Lazy;

/// Route of the fixed root crumb.
pub const HOME_PATH: &str = "/home";
/// Label of the fixed root crumb.
pub const HOME_LABEL: &str = "首页";

// Group entries keep the path of their first child, so the resolver's
// deepest-match rule decides which of the two gets selected.
static MENU: Lazy<Vec<MenuEntry>> = Lazy::new(|| {
    vec![
        MenuEntry::leaf("home", "首页", HOME_PATH).with_icon("home"),
        MenuEntry::group(
            "account",
            "账号管理",
            "/accountList",
            vec![
                MenuEntry::leaf("account-list", "账号列表", "/accountList"),
                MenuEntry::leaf("account-add", "添加账号", "/accountAdd"),
                MenuEntry::leaf("account-center", "个人信息", "/accountCenter"),
                MenuEntry::leaf("account-edit", "修改密码", "/accountEdit"),
            ],
        )
        .with_icon("users"),
        MenuEntry::group(
            "goods",
            "商品管理",
            "/goodsList",
            vec![
                MenuEntry::leaf("goods-list", "商品列表", "/goodsList"),
                MenuEntry::leaf("goods-add", "添加商品", "/goodsAdd"),
                MenuEntry::leaf("goods-type", "商品分类", "/goodsType"),
            ],
        )
        .with_icon("package"),
        MenuEntry::leaf("orders", "订单管理", "/orderList").with_icon("file-text"),
        MenuEntry::leaf("shop", "店铺管理", "/shopInfo").with_icon("store"),
        MenuEntry::group(
            "statistics",
            "统计数据",
            "/statisticsGoods",
            vec![
                MenuEntry::leaf("statistics-goods", "商品统计", "/statisticsGoods"),
                MenuEntry::leaf("statistics-orders", "订单统计", "/statisticsOrder"),
            ],
        )
        .with_icon("bar-chart"),
        MenuEntry::group(
            "permission",
            "权限管理",
            "/permissionInfo",
            vec![
                MenuEntry::leaf("permission-info", "权限管理", "/permissionInfo"),
                MenuEntry::leaf("permission-roles", "角色管理", "/permissionRole"),
            ],
        )
        .with_icon("settings"),
    ]
});

/// The whole tree, `'static` so resolver output can live inside reactive
/// closures.
pub fn menu_tree() -> &'static [MenuEntry] {
    &MENU
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::navigation::{validate_tree, ResolvedLocation};

    #[test]
    fn ids_are_globally_unique() {
        validate_tree(menu_tree()).unwrap();
    }

    #[test]
    fn group_paths_resolve_to_their_first_child() {
        let location = ResolvedLocation::resolve(menu_tree(), "/goodsList");
        assert_eq!(location.selected_id(), Some("goods-list"));
        assert_eq!(location.expanded_ids(), vec!["goods"]);
    }

    #[test]
    fn detail_routes_fall_outside_the_menu() {
        let location = ResolvedLocation::resolve(menu_tree(), "/goodsEdit/7");
        assert!(!location.is_match());
    }

    #[test]
    fn breadcrumb_for_nested_entry() {
        let location = ResolvedLocation::resolve(menu_tree(), "/statisticsOrder");
        let crumbs = location.breadcrumb(HOME_LABEL, HOME_PATH);
        let labels: Vec<_> = crumbs.iter().map(|crumb| crumb.label.as_str()).collect();
        assert_eq!(labels, vec!["首页", "统计数据", "订单统计"]);
    }
}
