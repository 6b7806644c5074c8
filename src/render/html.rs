//! Static HTML page surface
//!
//! [`HtmlSurface`] keeps the rendered state of every post and writes the full
//! blog page through its `Display` impl. Post and user text is escaped on the
//! way out; highlight markup arrives already escaped from
//! [`Highlighted::to_html`].

use super::RenderSurface;
use crate::markup::escape_html;
use crate::posts::{Comment, Post, PostId, Site};
use crate::search::{Highlighted, NoResultsNotice};
use crate::share::{Platform, post_url, share_url};
use std::fmt;

/// Id of the section holding the post list
pub const RESULTS_SECTION: &str = "blog";

#[derive(Debug, Clone)]
struct Article {
    post: Post,
    visible: bool,
    title_html: String,
    excerpt_html: String,
    comments: Vec<Comment>,
}

impl Article {
    fn new(post: &Post) -> Self {
        Self {
            visible: true,
            title_html: escape_html(&post.title),
            excerpt_html: escape_html(&post.excerpt),
            comments: post.comments.clone(),
            post: post.clone(),
        }
    }
}

/// Renders the blog page as a standalone HTML document
#[derive(Debug, Clone)]
pub struct HtmlSurface {
    site: Site,
    articles: Vec<Article>,
    query: String,
    notice_html: Option<String>,
    active_tag: Option<String>,
    scroll_requested: bool,
}

impl HtmlSurface {
    /// A page showing every post, unfiltered
    #[must_use]
    pub fn new(site: Site, posts: &[Post]) -> Self {
        Self {
            site,
            articles: posts.iter().map(Article::new).collect(),
            query: String::new(),
            notice_html: None,
            active_tag: None,
            scroll_requested: false,
        }
    }

    /// Prefill the search input
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Prepend a comment to a post's comment list
    ///
    /// Returns `false` if no post has that id.
    pub fn add_comment(&mut self, id: &PostId, comment: Comment) -> bool {
        match self.article_mut(id) {
            Some(article) => {
                article.comments.insert(0, comment);
                true
            }
            None => false,
        }
    }

    /// Number of posts currently shown
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.articles.iter().filter(|a| a.visible).count()
    }

    /// Render the full document
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn article_mut(&mut self, id: &PostId) -> Option<&mut Article> {
        self.articles.iter_mut().find(|a| &a.post.id == id)
    }

    fn write_article(&self, f: &mut fmt::Formatter<'_>, article: &Article) -> fmt::Result {
        let post = &article.post;
        let class = if article.visible { "blog-card" } else { "blog-card hidden" };

        writeln!(
            f,
            "<article class=\"{class}\" id=\"{}\" data-category=\"{}\">",
            escape_html(post.id.as_str()),
            escape_html(&post.category)
        )?;
        writeln!(f, "<h3 class=\"post-title\">{}</h3>", article.title_html)?;
        if !post.author.is_empty() || !post.date.is_empty() {
            writeln!(
                f,
                "<div class=\"post-meta\"><span class=\"post-author\">{}</span>\
                 <span class=\"post-date\">{}</span></div>",
                escape_html(&post.author),
                escape_html(&post.date)
            )?;
        }
        writeln!(f, "<p class=\"post-excerpt\">{}</p>", article.excerpt_html)?;

        write!(f, "<div class=\"post-tags\">")?;
        for tag in &post.tags {
            let active = self
                .active_tag
                .as_deref()
                .is_some_and(|active| active == tag.to_lowercase());
            let class = if active { "tag active-tag" } else { "tag" };
            write!(
                f,
                "<span class=\"{class}\" data-tag=\"{}\">{}</span>",
                escape_html(&tag.to_lowercase()),
                escape_html(tag)
            )?;
        }
        writeln!(f, "</div>")?;

        let url = post_url(&self.site.url, post.id.as_str());
        write!(f, "<div class=\"share-buttons\">")?;
        for platform in Platform::ALL {
            write!(
                f,
                "<a class=\"share-btn {}\" href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
                platform.id(),
                escape_html(&share_url(platform, &post.title, &url)),
                platform.label()
            )?;
        }
        writeln!(f, "</div>")?;

        writeln!(
            f,
            "<div class=\"comments-section\"><h4>Comments (<span class=\"comment-count\">{}</span>)</h4>",
            article.comments.len()
        )?;
        writeln!(f, "<div class=\"comments-list\">")?;
        for comment in &article.comments {
            writeln!(
                f,
                "<div class=\"comment\"><div class=\"comment-author\">{}\
                 <span class=\"comment-date\">{}</span></div>\
                 <div class=\"comment-text\">{}</div></div>",
                escape_html(&comment.author),
                escape_html(&comment.posted_at),
                escape_html(&comment.text)
            )?;
        }
        writeln!(f, "</div></div>")?;
        writeln!(f, "</article>")
    }
}

impl fmt::Display for HtmlSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = escape_html(&self.site.title);

        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html lang=\"en\">")?;
        writeln!(f, "<head><meta charset=\"utf-8\"><title>{title}</title></head>")?;
        if self.scroll_requested {
            writeln!(f, "<body data-scroll-target=\"{RESULTS_SECTION}\">")?;
        } else {
            writeln!(f, "<body>")?;
        }

        writeln!(f, "<header class=\"header\"><nav class=\"navbar\">")?;
        writeln!(f, "<a class=\"logo\" href=\"#home\">{title}</a>")?;
        writeln!(
            f,
            "<ul class=\"nav-menu\"><li><a class=\"nav-link active\" href=\"#home\">Home</a></li>\
             <li><a class=\"nav-link\" href=\"#{RESULTS_SECTION}\">Blog</a></li></ul>"
        )?;
        writeln!(f, "<button class=\"hamburger\" aria-label=\"Menu\">Menu</button>")?;
        writeln!(f, "</nav></header>")?;

        writeln!(f, "<section id=\"home\" class=\"hero\">")?;
        writeln!(
            f,
            "<input class=\"search-input\" type=\"search\" placeholder=\"Search posts\" value=\"{}\">",
            escape_html(&self.query)
        )?;
        writeln!(f, "</section>")?;

        writeln!(f, "<section id=\"{RESULTS_SECTION}\" class=\"blog\">")?;
        writeln!(f, "<div class=\"blog-grid\">")?;
        if let Some(notice) = &self.notice_html {
            writeln!(f, "{notice}")?;
        }
        for article in &self.articles {
            self.write_article(f, article)?;
        }
        writeln!(f, "</div>")?;
        writeln!(f, "</section>")?;

        writeln!(f, "<button class=\"scroll-top-btn\" aria-label=\"Back to top\">Top</button>")?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

impl RenderSurface for HtmlSurface {
    fn set_visible(&mut self, id: &PostId, visible: bool) {
        if let Some(article) = self.article_mut(id) {
            article.visible = visible;
        }
    }

    fn set_markup(&mut self, id: &PostId, title: &Highlighted, excerpt: &Highlighted) {
        if let Some(article) = self.article_mut(id) {
            article.title_html = title.to_html();
            article.excerpt_html = excerpt.to_html();
        }
    }

    fn show_notice(&mut self, notice: Option<&NoResultsNotice>) {
        self.notice_html = notice.map(NoResultsNotice::to_html);
    }

    fn set_active_tag(&mut self, tag: Option<&str>) {
        self.active_tag = tag.map(str::to_lowercase);
    }

    fn scroll_to_results(&mut self) {
        self.scroll_requested = true;
    }
}
