//! Post, comment, reply and like handlers.

use std::collections::HashMap;

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::{Comment, Post, Reply, User};
use quill_shared::ApiResponse;
use quill_shared::dto::{
    CommentRecord, CommentRequest, CommentView, LikeStatusResponse, PostBody, PostDetailResponse,
    PostListItem, PostListResponse, PostRecord, ReplyRecord, ReplyRequest, ReplyView, UserSummary,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::pagination::{PageQuery, paginate};
use crate::state::AppState;
use crate::validation::{self, POST_RULES};

fn post_not_found() -> AppError {
    AppError::NotFound("Post not found".to_string())
}

fn comment_not_found() -> AppError {
    AppError::NotFound("Comment not found".to_string())
}

/// Project a post to its raw stored form, user references unresolved.
fn post_record(post: &Post) -> PostRecord {
    PostRecord {
        id: post.id,
        title: post.title.clone(),
        content: post.content.clone(),
        author: post.author_id,
        likes: post.likes.clone(),
        comments: post
            .comments
            .iter()
            .map(|c| CommentRecord {
                id: c.id,
                text: c.text.clone(),
                author: c.author,
                replies: c
                    .replies
                    .iter()
                    .map(|r| ReplyRecord {
                        id: r.id,
                        text: r.text.clone(),
                        author: r.author,
                    })
                    .collect(),
            })
            .collect(),
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

fn summary_map(users: Vec<User>) -> HashMap<Uuid, UserSummary> {
    users
        .into_iter()
        .map(|u| (u.id, UserSummary {
            id: u.id,
            name: u.name,
        }))
        .collect()
}

/// Users are never deleted by this surface, so a miss only happens for
/// data written outside it; fall back to an empty name rather than fail.
fn summary_for(map: &HashMap<Uuid, UserSummary>, id: Uuid) -> UserSummary {
    map.get(&id).cloned().unwrap_or(UserSummary {
        id,
        name: String::new(),
    })
}

/// GET /api/v1/post - public, paginated
pub async fn get_all_posts(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let (page, limit) = query.into_inner().normalize();

    let total_count = state.posts.count().await?;
    let window = paginate(page, limit, total_count);
    let posts = state
        .posts
        .find_page(window.start_index, window.limit)
        .await?;

    let mut author_ids: Vec<Uuid> = posts.iter().map(|p| p.author_id).collect();
    author_ids.sort_unstable();
    author_ids.dedup();
    let authors = summary_map(state.users.find_by_ids(&author_ids).await?);

    let items = posts
        .iter()
        .map(|post| PostListItem {
            id: post.id,
            title: post.title.clone(),
            content: post.content.clone(),
            author: summary_for(&authors, post.author_id),
            likes_count: post.likes.len(),
            comments_count: post.comments.len(),
        })
        .collect();

    let data = PostListResponse {
        posts: items,
        total_count,
        page,
        limit: window.limit,
        total_pages: window.total_pages,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(data, "Posts fetched successfully")))
}

/// GET /api/v1/post/{post_id} - public, full detail
pub async fn get_single_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    let post = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(post_not_found)?;

    // Every user referenced anywhere in the document
    let mut ids: Vec<Uuid> = vec![post.author_id];
    ids.extend(&post.likes);
    for comment in &post.comments {
        ids.push(comment.author);
        ids.extend(comment.replies.iter().map(|r| r.author));
    }
    ids.sort_unstable();
    ids.dedup();

    let users = summary_map(state.users.find_by_ids(&ids).await?);

    let data = PostDetailResponse {
        id: post.id,
        title: post.title.clone(),
        content: post.content.clone(),
        author: summary_for(&users, post.author_id),
        likes: post.likes.iter().map(|id| summary_for(&users, *id)).collect(),
        comments: post
            .comments
            .iter()
            .map(|c| CommentView {
                id: c.id,
                text: c.text.clone(),
                author: summary_for(&users, c.author),
                replies: c
                    .replies
                    .iter()
                    .map(|r| ReplyView {
                        id: r.id,
                        text: r.text.clone(),
                        author: summary_for(&users, r.author),
                    })
                    .collect(),
            })
            .collect(),
        likes_count: post.likes.len(),
        comments_count: post.comments.len(),
        created_at: post.created_at,
        updated_at: post.updated_at,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(data, "Post fetched successfully")))
}

/// POST /api/v1/post/create - Protected route
pub async fn create_post(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<PostBody>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    validation::validate(
        POST_RULES,
        &[
            ("title", req.title.as_deref()),
            ("content", req.content.as_deref()),
        ],
    )?;

    // The shared rule set marks both fields optional for updates, but a
    // post cannot be created without them.
    let (Some(title), Some(content)) = (req.title, req.content) else {
        return Err(AppError::BadRequest(
            "Title and content are required".to_string(),
        ));
    };

    let post = Post::new(identity.user.id, title, content);
    let saved = state.posts.insert(post).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        post_record(&saved),
        "Post created successfully",
    )))
}

/// PATCH /api/v1/post/update/{post_id} - Protected route, author only
pub async fn update_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<PostBody>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let req = body.into_inner();

    validation::validate(
        POST_RULES,
        &[
            ("title", req.title.as_deref()),
            ("content", req.content.as_deref()),
        ],
    )?;

    let mut post = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(post_not_found)?;

    if post.author_id != identity.user.id {
        return Err(AppError::Forbidden(
            "You are not authorized to update this post".to_string(),
        ));
    }

    post.apply_update(req.title, req.content);
    let saved = state.posts.update(post).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        post_record(&saved),
        "Post updated successfully",
    )))
}

/// DELETE /api/v1/post/delete/{post_id} - Protected route, author only
pub async fn delete_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    let post = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(post_not_found)?;

    if post.author_id != identity.user.id {
        return Err(AppError::Forbidden(
            "You are not authorized to delete this post".to_string(),
        ));
    }

    state.posts.delete(post_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message_only("Post deleted successfully")))
}

/// POST /api/v1/post/comment/{post_id} - Protected route
pub async fn add_comment(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<CommentRequest>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    let mut post = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(post_not_found)?;

    post.add_comment(Comment::new(body.into_inner().text, identity.user.id));
    let saved = state.posts.update(post).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        post_record(&saved),
        "Comment added successfully",
    )))
}

/// DELETE /api/v1/post/comment/{post_id}/{comment_id} - Protected route,
/// comment author only
pub async fn delete_comment(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<(Uuid, Uuid)>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();

    let mut post = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(post_not_found)?;

    let comment_author = post
        .comment(comment_id)
        .ok_or_else(comment_not_found)?
        .author;

    if comment_author != identity.user.id {
        return Err(AppError::Forbidden(
            "You are not authorized to delete this comment".to_string(),
        ));
    }

    // Removing the comment discards its replies with it
    post.remove_comment(comment_id);
    let saved = state.posts.update(post).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        post_record(&saved),
        "Comment deleted successfully",
    )))
}

/// POST /api/v1/post/reply/{post_id}/{comment_id} - Protected route
pub async fn add_reply(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<(Uuid, Uuid)>,
    body: web::Json<ReplyRequest>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();

    let mut post = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(post_not_found)?;

    let comment = post.comment_mut(comment_id).ok_or_else(comment_not_found)?;
    comment.add_reply(Reply::new(body.into_inner().text, identity.user.id));

    let saved = state.posts.update(post).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        post_record(&saved),
        "Reply added successfully",
    )))
}

/// DELETE /api/v1/post/reply/{post_id}/{comment_id}/{reply_id} - Protected
/// route, reply author only
pub async fn delete_reply(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<(Uuid, Uuid, Uuid)>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id, reply_id) = path.into_inner();

    let mut post = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(post_not_found)?;

    let comment = post.comment_mut(comment_id).ok_or_else(comment_not_found)?;

    let reply_author = comment
        .reply(reply_id)
        .ok_or_else(|| AppError::NotFound("Reply not found".to_string()))?
        .author;

    if reply_author != identity.user.id {
        return Err(AppError::Forbidden(
            "You are not authorized to delete this reply".to_string(),
        ));
    }

    comment.remove_reply(reply_id);
    let saved = state.posts.update(post).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        post_record(&saved),
        "Reply deleted successfully",
    )))
}

/// POST /api/v1/post/like/{post_id} - Protected route, toggles the like
pub async fn like_unlike_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    let mut post = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(post_not_found)?;

    let is_liked = post.toggle_like(identity.user.id);
    let saved = state.posts.update(post).await?;

    let message = if is_liked {
        "Like added successfully."
    } else {
        "Like removed successfully."
    };

    let data = LikeStatusResponse {
        total_likes: saved.likes.len(),
        likes_by: saved.likes,
        is_liked,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(data, message)))
}

#[cfg(test)]
mod tests {
    use actix_web::test;
    use serde_json::{Value, json};

    use quill_core::domain::{Comment, Post, Reply};

    use crate::handlers::test_support::{self, test_app};

    #[actix_web::test]
    async fn create_requires_both_title_and_content() {
        let ctx = test_support::context();
        let (_, token) = ctx.seed_user("Jordan", "jordan@example.com").await;
        let app = test_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/api/v1/post/create")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .set_json(json!({ "title": "Only a title" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn create_and_fetch_single_post() {
        let ctx = test_support::context();
        let (user, token) = ctx.seed_user("Jordan", "jordan@example.com").await;
        let app = test_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/api/v1/post/create")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .set_json(json!({ "title": "First post", "content": "Hello world" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["author"], user.id.to_string());
        let post_id = body["data"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/post/{post_id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["title"], "First post");
        assert_eq!(body["data"]["author"]["name"], "Jordan");
        assert_eq!(body["data"]["likesCount"], 0);
        assert_eq!(body["data"]["commentsCount"], 0);
    }

    #[actix_web::test]
    async fn update_by_non_author_is_forbidden() {
        let ctx = test_support::context();
        let (author, _) = ctx.seed_user("Author", "author@example.com").await;
        let (_, other_token) = ctx.seed_user("Other", "other@example.com").await;

        let post = Post::new(author.id, "Title".into(), "Content".into());
        let post = ctx.state.posts.insert(post).await.unwrap();
        let app = test_app!(ctx);

        let req = test::TestRequest::patch()
            .uri(&format!("/api/v1/post/update/{}", post.id))
            .insert_header(("Authorization", format!("Bearer {other_token}")))
            .set_json(json!({ "title": "Hijacked" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);
    }

    #[actix_web::test]
    async fn delete_by_non_author_is_forbidden() {
        let ctx = test_support::context();
        let (author, _) = ctx.seed_user("Author", "author@example.com").await;
        let (_, other_token) = ctx.seed_user("Other", "other@example.com").await;

        let post = Post::new(author.id, "Title".into(), "Content".into());
        let post = ctx.state.posts.insert(post).await.unwrap();
        let app = test_app!(ctx);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/post/delete/{}", post.id))
            .insert_header(("Authorization", format!("Bearer {other_token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);

        // Still there
        assert!(
            ctx.state
                .posts
                .find_by_id(post.id)
                .await
                .unwrap()
                .is_some()
        );
    }

    #[actix_web::test]
    async fn author_can_update_own_post() {
        let ctx = test_support::context();
        let (author, token) = ctx.seed_user("Author", "author@example.com").await;

        let post = Post::new(author.id, "Title".into(), "Content".into());
        let post = ctx.state.posts.insert(post).await.unwrap();
        let app = test_app!(ctx);

        let req = test::TestRequest::patch()
            .uri(&format!("/api/v1/post/update/{}", post.id))
            .insert_header(("Authorization", format!("Bearer {token}")))
            .set_json(json!({ "content": "Edited content" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["title"], "Title");
        assert_eq!(body["data"]["content"], "Edited content");
    }

    #[actix_web::test]
    async fn missing_post_is_not_found() {
        let ctx = test_support::context();
        let (_, token) = ctx.seed_user("Jordan", "jordan@example.com").await;
        let app = test_app!(ctx);

        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/post/like/{}", uuid::Uuid::new_v4()))
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn like_toggle_roundtrip() {
        let ctx = test_support::context();
        let (author, _) = ctx.seed_user("Author", "author@example.com").await;
        let (_, liker_token) = ctx.seed_user("Liker", "liker@example.com").await;

        let post = Post::new(author.id, "Title".into(), "Content".into());
        let post = ctx.state.posts.insert(post).await.unwrap();
        let app = test_app!(ctx);

        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/post/like/{}", post.id))
            .insert_header(("Authorization", format!("Bearer {liker_token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["isLiked"], true);
        assert_eq!(body["data"]["totalLikes"], 1);
        assert_eq!(body["data"]["likesBy"].as_array().unwrap().len(), 1);

        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/post/like/{}", post.id))
            .insert_header(("Authorization", format!("Bearer {liker_token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["isLiked"], false);
        assert_eq!(body["data"]["totalLikes"], 0);
        assert!(body["data"]["likesBy"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn comments_and_replies_roundtrip() {
        let ctx = test_support::context();
        let (author, _) = ctx.seed_user("Author", "author@example.com").await;
        let (_, commenter_token) = ctx.seed_user("Commenter", "commenter@example.com").await;

        let post = Post::new(author.id, "Title".into(), "Content".into());
        let post = ctx.state.posts.insert(post).await.unwrap();
        let app = test_app!(ctx);

        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/post/comment/{}", post.id))
            .insert_header(("Authorization", format!("Bearer {commenter_token}")))
            .set_json(json!({ "text": "Nice post" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        let comment_id = body["data"]["comments"][0]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/post/reply/{}/{comment_id}", post.id))
            .insert_header(("Authorization", format!("Bearer {commenter_token}")))
            .set_json(json!({ "text": "Replying to myself" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["data"]["comments"][0]["replies"][0]["text"],
            "Replying to myself"
        );
    }

    #[actix_web::test]
    async fn deleting_a_comment_discards_its_replies() {
        let ctx = test_support::context();
        let (author, _) = ctx.seed_user("Author", "author@example.com").await;
        let (commenter, commenter_token) =
            ctx.seed_user("Commenter", "commenter@example.com").await;

        let mut post = Post::new(author.id, "Title".into(), "Content".into());
        let mut comment = Comment::new("Top-level".into(), commenter.id);
        comment.add_reply(Reply::new("Nested one".into(), author.id));
        comment.add_reply(Reply::new("Nested two".into(), commenter.id));
        let comment_id = comment.id;
        post.add_comment(comment);
        let post = ctx.state.posts.insert(post).await.unwrap();
        let app = test_app!(ctx);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/post/comment/{}/{comment_id}", post.id))
            .insert_header(("Authorization", format!("Bearer {commenter_token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/post/{}", post.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body: Value = test::read_body_json(resp).await;
        assert!(body["data"]["comments"].as_array().unwrap().is_empty());
        assert_eq!(body["data"]["commentsCount"], 0);
    }

    #[actix_web::test]
    async fn comment_deletion_by_non_author_is_forbidden() {
        let ctx = test_support::context();
        let (author, author_token) = ctx.seed_user("Author", "author@example.com").await;
        let (commenter, _) = ctx.seed_user("Commenter", "commenter@example.com").await;

        let mut post = Post::new(author.id, "Title".into(), "Content".into());
        let comment = Comment::new("Not yours to delete".into(), commenter.id);
        let comment_id = comment.id;
        post.add_comment(comment);
        let post = ctx.state.posts.insert(post).await.unwrap();
        let app = test_app!(ctx);

        // The post author still cannot delete someone else's comment
        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/post/comment/{}/{comment_id}", post.id))
            .insert_header(("Authorization", format!("Bearer {author_token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);
    }

    #[actix_web::test]
    async fn reply_deletion_by_non_author_is_forbidden() {
        let ctx = test_support::context();
        let (author, author_token) = ctx.seed_user("Author", "author@example.com").await;
        let (replier, _) = ctx.seed_user("Replier", "replier@example.com").await;

        let mut post = Post::new(author.id, "Title".into(), "Content".into());
        let mut comment = Comment::new("Comment".into(), author.id);
        let reply = Reply::new("Reply".into(), replier.id);
        let (comment_id, reply_id) = (comment.id, reply.id);
        comment.add_reply(reply);
        post.add_comment(comment);
        let post = ctx.state.posts.insert(post).await.unwrap();
        let app = test_app!(ctx);

        let req = test::TestRequest::delete()
            .uri(&format!(
                "/api/v1/post/reply/{}/{comment_id}/{reply_id}",
                post.id
            ))
            .insert_header(("Authorization", format!("Bearer {author_token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);
    }

    #[actix_web::test]
    async fn listing_is_paginated_and_newest_first() {
        let ctx = test_support::context();
        let (author, _) = ctx.seed_user("Author", "author@example.com").await;

        for i in 0..25 {
            let mut post = Post::new(author.id, format!("Post {i}"), "Content".into());
            post.created_at = post.created_at + chrono::TimeDelta::seconds(i);
            ctx.state.posts.insert(post).await.unwrap();
        }
        let app = test_app!(ctx);

        let req = test::TestRequest::get()
            .uri("/api/v1/post?page=2&limit=10")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["totalCount"], 25);
        assert_eq!(body["data"]["totalPages"], 3);
        assert_eq!(body["data"]["page"], 2);

        let posts = body["data"]["posts"].as_array().unwrap();
        assert_eq!(posts.len(), 10);
        // Page 2 starts after the ten newest
        assert_eq!(posts[0]["title"], "Post 14");
        assert_eq!(posts[0]["author"]["name"], "Author");
        assert_eq!(posts[0]["likesCount"], 0);
        assert_eq!(posts[0]["commentsCount"], 0);
    }

    #[actix_web::test]
    async fn like_scenario_end_to_end() {
        let ctx = test_support::context();
        let (_, creator_token) = ctx.seed_user("Creator", "creator@example.com").await;
        let (_, liker_token) = ctx.seed_user("Liker", "liker@example.com").await;
        let app = test_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/api/v1/post/create")
            .insert_header(("Authorization", format!("Bearer {creator_token}")))
            .set_json(json!({ "title": "TTT", "content": "CCC" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body: Value = test::read_body_json(resp).await;
        let post_id = body["data"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::get().uri("/api/v1/post").to_request();
        let resp = test::call_service(&app, req).await;
        let body: Value = test::read_body_json(resp).await;
        let listed = &body["data"]["posts"][0];
        assert_eq!(listed["id"].as_str().unwrap(), post_id);
        assert_eq!(listed["likesCount"], 0);
        assert_eq!(listed["commentsCount"], 0);

        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/post/like/{post_id}"))
            .insert_header(("Authorization", format!("Bearer {liker_token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["isLiked"], true);
        assert_eq!(body["data"]["totalLikes"], 1);

        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/post/like/{post_id}"))
            .insert_header(("Authorization", format!("Bearer {liker_token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["isLiked"], false);
        assert_eq!(body["data"]["totalLikes"], 0);
    }
}
