//! Static ranked list of popular sites
//!
//! Fills whatever capacity the other sources leave, matched by substring.

pub const TOP_SITES: &[&str] = &[
    "google.com",
    "youtube.com",
    "facebook.com",
    "baidu.com",
    "wikipedia.org",
    "yahoo.com",
    "reddit.com",
    "amazon.com",
    "twitter.com",
    "instagram.com",
    "linkedin.com",
    "live.com",
    "ebay.com",
    "bing.com",
    "netflix.com",
    "msn.com",
    "microsoft.com",
    "yandex.ru",
    "vk.com",
    "twitch.tv",
    "apple.com",
    "github.com",
    "stackoverflow.com",
    "imgur.com",
    "tumblr.com",
    "wordpress.com",
    "paypal.com",
    "pinterest.com",
    "office.com",
    "dropbox.com",
    "adobe.com",
    "imdb.com",
    "craigslist.org",
    "nytimes.com",
    "cnn.com",
    "bbc.co.uk",
    "espn.com",
    "theguardian.com",
    "washingtonpost.com",
    "wikia.com",
    "booking.com",
    "tripadvisor.com",
    "walmart.com",
    "etsy.com",
    "quora.com",
    "medium.com",
    "spotify.com",
    "soundcloud.com",
    "vimeo.com",
    "flickr.com",
    "salesforce.com",
    "zillow.com",
    "yelp.com",
    "indeed.com",
    "bankofamerica.com",
    "chase.com",
    "wellsfargo.com",
    "weather.com",
    "forbes.com",
    "bloomberg.com",
    "cnet.com",
    "huffingtonpost.com",
    "foxnews.com",
    "mozilla.org",
    "w3schools.com",
    "duckduckgo.com",
    "archive.org",
    "slack.com",
    "zoom.us",
    "whatsapp.com",
];
