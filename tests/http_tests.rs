mod common;

use axum::http::{header, StatusCode};
use blogly::entities::{tag, user};
use blogly::repositories::post_tag_repository::PostTagRepository;
use common::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use tower::ServiceExt;

fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// `name=value` of the first Set-Cookie header, ready to send back.
fn flash_cookie(response: &axum::response::Response) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("flash cookie");
    set_cookie.split(';').next().unwrap().to_string()
}

#[tokio::test]
async fn health_check_returns_ok() {
    let app = test_app(setup_db().await);

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "OK");
}

#[tokio::test]
async fn homepage_shows_recent_posts() {
    let db = setup_db().await;
    let user = create_user(&db, "Alan", "Alda").await;
    for title in ["A", "B", "C", "D", "E", "F"] {
        create_post(&db, user.id, &format!("Post {}", title), &[]).await;
    }
    let app = test_app(db);

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Post F"));
    assert!(body.contains("Post B"));
    assert!(!body.contains("Post A"));
    assert!(body.contains("Alan Alda"));
}

#[tokio::test]
async fn creating_user_redirects_with_one_shot_message() {
    let db = setup_db().await;
    let app = test_app(db.clone());

    let response = app
        .clone()
        .oneshot(post_form_request("/users/new", "first_name=Alan&last_name=Alda&image_url="))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/users");
    let cookie = flash_cookie(&response);
    assert!(cookie.starts_with("_flash="));

    let mut follow = get("/users");
    follow.headers_mut().insert(header::COOKIE, cookie.parse().unwrap());
    let response = app.clone().oneshot(follow).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let removal = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(removal.starts_with("_flash="));
    assert!(removal.contains("Max-Age=0"));

    let body = body_text(response).await;
    assert!(body.contains("User Alan Alda added."));

    // Without the cookie the message is gone
    let body = body_text(app.oneshot(get("/users")).await.unwrap()).await;
    assert!(!body.contains("User Alan Alda added."));

    let saved = user::Entity::find().all(&db).await.unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].image_url, user::DEFAULT_IMAGE_URL);
}

#[tokio::test]
async fn blank_required_field_is_rejected() {
    let db = setup_db().await;
    let app = test_app(db.clone());

    let response = app
        .oneshot(post_form_request("/users/new", "first_name=++&last_name=Alda"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(response).await.contains("first_name"));

    assert_eq!(user::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn blank_edit_of_existing_user_is_rejected() {
    let db = setup_db().await;
    let user = create_user(&db, "Alan", "Alda").await;
    let app = test_app(db.clone());

    let response = app
        .oneshot(post_form_request(&format!("/users/{}/edit", user.id), "first_name=&last_name=Smith"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(response).await.contains("t be blank"));

    let unchanged = user::Entity::find_by_id(user.id).one(&db).await.unwrap().unwrap();
    assert_eq!(unchanged.last_name, "Alda");
}

#[tokio::test]
async fn missing_records_render_not_found() {
    let app = test_app(setup_db().await);

    for uri in [
        "/users/99999",
        "/users/99999/edit",
        "/users/99999/posts/new",
        "/posts/99999",
        "/posts/99999/edit",
        "/tags/99999",
        "/tags/99999/edit",
        "/users/abc",
        "/users/99999999999",
        "/posts/abc/edit",
        "/tags/1.5",
        "/no/such/page",
    ] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {}", uri);
        assert!(body_text(response).await.contains("404"), "GET {}", uri);
    }

    for (uri, body) in [
        ("/users/99999/delete", ""),
        ("/posts/99999/delete", ""),
        ("/tags/99999/delete", ""),
        ("/users/99999/edit", "first_name=Jane&last_name=Smith&image_url="),
        ("/posts/99999/edit", "title=Hello&content=World"),
        ("/tags/99999/edit", "name=Fun"),
        ("/users/99999/posts/new", "title=Hello&content=World"),
        // The missing row wins over a blank submission
        ("/users/99999/edit", "first_name=&last_name="),
        ("/posts/99999/edit", "title=&content="),
        ("/tags/99999/edit", "name="),
        ("/users/99999/posts/new", "title="),
        ("/users/abc/delete", ""),
        ("/tags/abc/edit", "name=Fun"),
    ] {
        let response = app.clone().oneshot(post_form_request(uri, body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "POST {}", uri);
    }
}

#[tokio::test]
async fn duplicate_tag_name_is_a_conflict() {
    let db = setup_db().await;
    create_tag(&db, "Rust").await;
    let app = test_app(db.clone());

    let response = app.oneshot(post_form_request("/tags/new", "name=Rust")).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(tag::Entity::find().count(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn creating_post_links_checked_tags_and_returns_to_user() {
    let db = setup_db().await;
    let user = create_user(&db, "Alan", "Alda").await;
    let fun = create_tag(&db, "Fun").await;
    let zope = create_tag(&db, "Zope").await;
    let app = test_app(db.clone());

    let body = format!("title=First+Post&content=Hello&tags={}&tags={}&tags=999", fun.id, zope.id);
    let response = app
        .clone()
        .oneshot(post_form_request(&format!("/users/{}/posts/new", user.id), &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), format!("/users/{}", user.id));

    let detail = blogly::services::user_service::UserService::get_user_detail(&db, user.id)
        .await
        .unwrap();
    assert_eq!(detail.posts.len(), 1);
    let post_id = detail.posts[0].post.id;
    let linked = PostTagRepository::tag_ids_for_post(&db, post_id).await.unwrap();
    assert_eq!(linked.into_iter().collect::<Vec<_>>(), vec![fun.id, zope.id]);

    let body = body_text(app.oneshot(get(&format!("/posts/{}", post_id))).await.unwrap()).await;
    assert!(body.contains("First Post"));
    assert!(body.contains("Zope"));
}

#[tokio::test]
async fn deleting_user_names_them_in_the_message() {
    let db = setup_db().await;
    let user = create_user(&db, "Alan", "Alda").await;
    create_post(&db, user.id, "Gone", &[]).await;
    let app = test_app(db.clone());

    let response = app
        .clone()
        .oneshot(post_form_request(&format!("/users/{}/delete", user.id), ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/users");

    let mut follow = get("/users");
    follow
        .headers_mut()
        .insert(header::COOKIE, flash_cookie(&response).parse().unwrap());
    let body = body_text(app.oneshot(follow).await.unwrap()).await;
    assert!(body.contains("User Alan Alda deleted."));

    assert_eq!(user::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn tag_pages_list_and_preselect_posts() {
    let db = setup_db().await;
    let user = create_user(&db, "Alan", "Alda").await;
    let post = create_post(&db, user.id, "Tagged", &[]).await;
    let other = create_post(&db, user.id, "Untagged", &[]).await;
    let tag = blogly::services::tag_service::TagService::create_tag(&db, tag_form("Zope", &[post.id]))
        .await
        .unwrap();
    let app = test_app(db);

    let body = body_text(app.clone().oneshot(get("/tags")).await.unwrap()).await;
    assert!(body.contains("Zope"));

    let response = app.oneshot(get(&format!("/tags/{}/edit", tag.id))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains(&format!(r#"value="{}" checked"#, post.id)));
    assert!(!body.contains(&format!(r#"value="{}" checked"#, other.id)));
}
