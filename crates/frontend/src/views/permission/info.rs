use leptos::prelude::*;

/// Module access by user group.
#[component]
pub fn PermissionInfo() -> impl IntoView {
    let rows = [
        ("账号管理", true, false),
        ("商品管理", true, true),
        ("订单管理", true, true),
        ("店铺管理", true, false),
        ("统计数据", true, true),
        ("权限管理", true, false),
    ];

    view! {
        <div class="page page--permission-info">
            <h2 class="page__title">"权限管理"</h2>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"功能模块"</th>
                        <th>"管理员"</th>
                        <th>"普通用户"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|(module, admin, user)| view! {
                            <tr>
                                <td>{module}</td>
                                <td>{if admin { "✓" } else { "—" }}</td>
                                <td>{if user { "✓" } else { "—" }}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
