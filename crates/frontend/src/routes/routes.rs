use crate::layout::Shell;
use crate::system::auth::context::use_session;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFound;
use crate::views::account::{AccountAdd, AccountCenter, AccountEdit, AccountList};
use crate::views::goods::{GoodsAdd, GoodsCategories, GoodsList, GoodsUpdate};
use crate::views::home::HomePage;
use crate::views::orders::OrderList;
use crate::views::permission::{PermissionInfo, PermissionRoles};
use crate::views::shop::ShopInfo;
use crate::views::statistics::{GoodsStatistics, OrderStatistics};
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

/// Authenticated branch of the route table. Everything below renders inside
/// the shell; without a session the login page takes over.
#[component]
fn MainLayout() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <Shell />
        </Show>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=LoginPage />
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute path=path!("") view=MainLayout>
                    <Route path=path!("/home") view=HomePage />
                    <Route path=path!("/accountList") view=AccountList />
                    <Route path=path!("/accountAdd") view=AccountAdd />
                    <Route path=path!("/accountCenter") view=AccountCenter />
                    <Route path=path!("/accountEdit") view=AccountEdit />
                    <Route path=path!("/goodsList") view=GoodsList />
                    <Route path=path!("/goodsAdd") view=GoodsAdd />
                    <Route path=path!("/goodsEdit/:id") view=GoodsUpdate />
                    <Route path=path!("/goodsType") view=GoodsCategories />
                    <Route path=path!("/orderList") view=OrderList />
                    <Route path=path!("/statisticsGoods") view=GoodsStatistics />
                    <Route path=path!("/statisticsOrder") view=OrderStatistics />
                    <Route path=path!("/permissionInfo") view=PermissionInfo />
                    <Route path=path!("/permissionRole") view=PermissionRoles />
                    <Route path=path!("/shopInfo") view=ShopInfo />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
