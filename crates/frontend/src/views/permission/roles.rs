use leptos::prelude::*;

/// User group descriptions.
#[component]
pub fn PermissionRoles() -> impl IntoView {
    let roles = [
        ("管理员", "完整后台权限：账号、商品、订单、店铺与权限配置。"),
        ("普通用户", "日常运营权限：商品、订单与统计数据。"),
    ];

    view! {
        <div class="page page--permission-roles">
            <h2 class="page__title">"角色管理"</h2>
            <div class="role-cards">
                {roles
                    .into_iter()
                    .map(|(name, description)| view! {
                        <div class="role-card">
                            <div class="role-card__name">{name}</div>
                            <div class="role-card__desc">{description}</div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
