//! HTML pages
//!
//! Inline templates. User text is inserted as-is.

use postboard_core::{Post, PostSummary};

const STYLE: &str = r#"
    /* Global Styles */
    body {
        font-family: Arial, sans-serif;
        background-color: #f4f4f9;
        margin: 0;
        padding: 50px 0 0 0;
        display: flex;
        justify-content: center;
        align-items: flex-start;
        min-height: 100vh;
    }

    .container {
        background-color: #ffffff;
        border-radius: 8px;
        box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1);
        padding: 20px;
        width: 90%;
        max-width: 800px;
        overflow: hidden;
    }

    h1 {
        text-align: center;
        color: #333;
        margin-bottom: 20px;
    }

    h2 {
        color: #333;
        font-size: 1.2rem;
        margin-bottom: 10px;
    }

    form {
        display: flex;
        flex-direction: column;
        margin-bottom: 20px;
    }

    input[type="text"], textarea {
        padding: 10px;
        border-radius: 5px;
        border: 1px solid #ccc;
        margin-bottom: 10px;
        font-size: 16px;
    }

    button {
        padding: 10px;
        border: none;
        background-color: #4CAF50;
        color: white;
        font-size: 16px;
        border-radius: 5px;
        cursor: pointer;
    }

    button:hover {
        background-color: #45a049;
    }

    .post {
        background-color: #f9f9f9;
        border-left: 5px solid #4CAF50;
        padding: 10px;
        margin-bottom: 10px;
        border-radius: 5px;
        word-wrap: break-word;
        white-space: pre-wrap;
    }

    .post p {
        margin: 0;
        font-size: 16px;
        color: #555;
    }

    a {
        color: #4CAF50;
        text-decoration: none;
    }

    a:hover {
        text-decoration: underline;
    }

    @media (max-width: 600px) {
        input[type="text"], textarea, button {
            font-size: 14px;
        }
    }
"#;

/// Detail link for a user's post, with the name percent-encoded as a path segment
pub fn read_more_href(user_name: &str) -> String {
    format!("/read-more/{}", urlencoding::encode(user_name))
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body>
    <div class="container">
{body}
    </div>
</body>
</html>
"#
    )
}

/// Home page: submission form followed by every post's summary
pub fn list_page(posts: &[PostSummary]) -> String {
    let mut body = String::from(
        r#"        <h1>Post Your Thoughts</h1>
        <form action="/submit" method="POST">
            <input type="text" name="userName" placeholder="Enter your name" required>
            <textarea name="postContent" placeholder="Write your post here..." rows="5" required></textarea>
            <button type="submit">Submit Post</button>
        </form>

        <h2>Previous Posts:</h2>
        <div id="posts">
"#,
    );

    for post in posts {
        body.push_str(&format!(
            "            <div class=\"post\">\n                <p><strong>{}</strong>: {}</p>\n",
            post.user_name, post.excerpt
        ));
        if post.truncated {
            body.push_str(&format!(
                "                <a href=\"{}\">Read more...</a>\n",
                read_more_href(&post.user_name)
            ));
        }
        body.push_str("            </div>\n");
    }

    body.push_str("        </div>");
    page("Post Your Thoughts", &body)
}

/// Full post page
pub fn detail_page(post: &Post) -> String {
    let body = format!(
        r#"        <h1>Post by {user}</h1>
        <div class="post"><p>{content}</p></div>
        <a href="/">Back to all posts</a>"#,
        user = post.user_name,
        content = post.content,
    );
    page(&format!("Post by {}", post.user_name), &body)
}
