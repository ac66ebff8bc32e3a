use yew::prelude::*;

/// Long-form article shown under the tool. Static content; the only
/// behavior is the collapsed/expanded window around it.
#[function_component(SeoArticle)]
pub fn seo_article() -> Html {
    let expanded = use_state(|| false);

    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };

    let window_class = if *expanded {
        "article-window expanded"
    } else {
        "article-window"
    };

    html! {
        <section id="learn-more" class="article-panel">
            <div class={window_class}>
                <article>
                    <h2 id="article-title">{"The Ultimate Guide to Website Thumbnails and Screenshot APIs"}</h2>
                    <p>
                        {"In today's visually-driven digital landscape, first impressions are paramount. \
                          When you share a link on social media, in a chat application, or even in a work \
                          document, a bland URL is often ignored. What captures attention is a rich, visual \
                          preview, a thumbnail of the destination website. This small image provides \
                          immediate context, builds trust, and dramatically increases engagement. But have \
                          you ever wondered how these thumbnails are generated? It's not as simple as it \
                          looks. This comprehensive guide will delve into the world of website thumbnails, \
                          explore the technical challenges involved, and reveal why third-party Screenshot \
                          APIs are the essential tool for any modern web application."}
                    </p>

                    <nav id="toc">
                        <h3>{"Table of Contents"}</h3>
                        <ul>
                            <li><a href="#why-visuals-matter">{"Why Visual Previews Matter: The Power of a Thumbnail"}</a></li>
                            <li><a href="#technical-challenge">{"The Great Wall of Web Security: Why Browsers Can't Take Screenshots"}</a></li>
                            <li><a href="#api-solution">{"The Solution: How Third-Party Screenshot APIs Work"}</a></li>
                            <li><a href="#use-cases">{"Powerful Use Cases for Website Thumbnails"}</a></li>
                            <li><a href="#api-considerations">{"Choosing a Screenshot API: Key Considerations & Rate Limits"}</a></li>
                            <li><a href="#data-table">{"Data Deep Dive: Screenshot Resolutions vs. File Sizes"}</a></li>
                            <li><a href="#faq">{"Frequently Asked Questions (FAQ)"}</a></li>
                        </ul>
                    </nav>

                    <section id="why-visuals-matter">
                        <h3>{"Why Visual Previews Matter: The Power of a Thumbnail"}</h3>
                        <p>
                            {"The human brain processes images 60,000 times faster than text. A website \
                              thumbnail leverages this cognitive shortcut to provide instant information and \
                              context. Before a user even clicks a link, a thumbnail can communicate the \
                              brand's identity, the type of content to expect, and the overall \
                              professionalism of the site."}
                        </p>
                        <strong>{"Key benefits include:"}</strong>
                        <ul>
                            <li>
                                <strong>{"Increased Click-Through Rates (CTR):"}</strong>
                                {" Links with image previews are consistently shown to have higher engagement \
                                  rates across all platforms, from social media to email marketing."}
                            </li>
                            <li>
                                <strong>{"Enhanced User Trust:"}</strong>
                                {" A clear, professional-looking thumbnail signals a legitimate and safe \
                                  destination, reducing user hesitation. A broken or missing image, \
                                  conversely, can appear spammy."}
                            </li>
                            <li>
                                <strong>{"Improved Brand Recognition:"}</strong>
                                {" Consistently showing your website's design and logo helps reinforce your \
                                  brand identity every time a link is shared."}
                            </li>
                            <li>
                                <strong>{"Better User Experience (UX):"}</strong>
                                {" In applications like bookmark managers or browser history, thumbnails \
                                  allow users to quickly identify and navigate to the pages they're looking \
                                  for, replacing the cognitive load of reading through a list of URLs and \
                                  titles."}
                            </li>
                        </ul>
                        <p>
                            {"Think about the last time you saw a link on Twitter or Facebook. The \
                              accompanying card with a title, description, and a large image is what likely \
                              determined whether you engaged with it. This is the Open Graph protocol in \
                              action, and the image it pulls is, in essence, a pre-generated website \
                              thumbnail. Without it, the web would be a far less intuitive and engaging \
                              place."}
                        </p>
                    </section>

                    <section id="technical-challenge">
                        <h3>{"The Great Wall of Web Security: Why Browsers Can't Take Screenshots"}</h3>
                        <p>
                            {"A common question from developers is, \"Why can't I just use JavaScript to \
                              load a website in an iframe and capture its content as an image?\" The answer \
                              lies in a cornerstone of web security: the "}
                            <strong>{"Same-Origin Policy (SOP)"}</strong>
                            {"."}
                        </p>
                        <p>
                            {"The Same-Origin Policy is a critical security mechanism that restricts how a \
                              document or script loaded from one \"origin\" can interact with a resource \
                              from another \"origin.\" An origin is defined by the combination of URI scheme \
                              (http, https), hostname (your-domain.com), and port (80, 443)."}
                        </p>
                        <blockquote>
                            {"If your website, `my-cool-tool.com`, tries to access the content of an iframe \
                              pointing to `google.com`, the browser will block it. This prevents your script \
                              from reading potentially sensitive information from the other site, like user \
                              data, session cookies, or proprietary content."}
                        </blockquote>
                        <p>
                            {"This security feature directly impacts screenshot generation. Libraries like \
                              `html2canvas` are excellent for taking \"screenshots\" of the current page's \
                              DOM elements because they operate within the same origin. However, if you try \
                              to use them on a cross-origin iframe, you'll hit a wall. The library can't \
                              access the pixels of the embedded website, and the resulting canvas will be \
                              \"tainted,\" preventing you from exporting its data. This is a deliberate and \
                              essential security feature, not a bug. Without it, any malicious website could \
                              secretly load your online banking portal in a hidden iframe and record your \
                              screen."}
                        </p>
                        <p>
                            {"This is where the concept of "}
                            <strong>{"Cross-Origin Resource Sharing (CORS)"}</strong>
                            {" comes in. CORS is a mechanism that uses additional HTTP headers to tell \
                              browsers to give a web application running at one origin, access to selected \
                              resources from a different origin. However, for a screenshot tool, you would \
                              need every website on the internet to explicitly add a CORS header allowing \
                              your domain to access its content, an impossible scenario."}
                        </p>
                    </section>

                    <section id="api-solution">
                        <h3>{"The Solution: How Third-Party Screenshot APIs Work"}</h3>
                        <p>
                            {"If client-side JavaScript is blocked by security policies, how do we solve \
                              the problem? The solution is to move the screenshot process to a controlled \
                              server environment where these browser limitations don't apply. This is \
                              precisely what a Screenshot API does."}
                        </p>
                        <strong>{"Here's a step-by-step breakdown of the process:"}</strong>
                        <ol>
                            <li>
                                <strong>{"API Request:"}</strong>
                                {" Your application sends an HTTP request to the Screenshot API endpoint. \
                                  This request includes the target URL you want to capture and various \
                                  parameters (e.g., resolution, full page vs. viewport, image format)."}
                            </li>
                            <li>
                                <strong>{"Headless Browser Instance:"}</strong>
                                {" The API service maintains a fleet of servers running \"headless\" \
                                  browsers. A headless browser is a real web browser (like Chrome or \
                                  Firefox) that runs without a graphical user interface. It can do \
                                  everything a normal browser can, render HTML, execute JavaScript, load \
                                  CSS, but it's all controlled programmatically."}
                            </li>
                            <li>
                                <strong>{"Website Rendering:"}</strong>
                                {" The service spins up a fresh, isolated browser instance and navigates to \
                                  your target URL. It waits for the page to fully load, including executing \
                                  JavaScript, fetching data, and rendering CSS animations. Advanced APIs can \
                                  even handle cookie banners, logins, and other complex interactions."}
                            </li>
                            <li>
                                <strong>{"Image Capture:"}</strong>
                                {" Once the page is fully rendered, the headless browser's built-in \
                                  functionality is used to capture a high-quality screenshot of the rendered \
                                  page. This is done on the server, completely bypassing any client-side \
                                  CORS or Same-Origin Policy issues."}
                            </li>
                            <li>
                                <strong>{"Image Processing & Response:"}</strong>
                                {" The captured image can be processed (e.g., compressed, cropped, converted \
                                  to different formats like JPEG, PNG, or WebP) and is then returned to your \
                                  application in the API response. This can be a direct image file, a Base64 \
                                  encoded string, or a URL pointing to the image hosted on a CDN."}
                            </li>
                        </ol>
                        <p>
                            {"By using a third-party API, you offload all the complex infrastructure, \
                              security, and rendering challenges. You simply make a request and get a \
                              perfect image back, allowing you to focus on building your application's core \
                              features."}
                        </p>
                    </section>

                    <section id="use-cases">
                        <h3>{"Powerful Use Cases for Website Thumbnails"}</h3>
                        <p>{"The applications of automated website screenshots are vast and span multiple industries:"}</p>
                        <ul>
                            <li>
                                <strong>{"Social Media & Marketing:"}</strong>
                                {" Automatically generate `og:image` tags for link previews, ensuring every \
                                  link shared from your platform looks professional and inviting."}
                            </li>
                            <li>
                                <strong>{"Web Development & QA Testing:"}</strong>
                                {" Integrate screenshot generation into your CI/CD pipeline to perform \
                                  visual regression testing. Automatically capture screenshots of key pages \
                                  across different environments (development, staging, production) to \
                                  quickly spot unintended UI changes."}
                            </li>
                            <li>
                                <strong>{"Website Monitoring & Archiving:"}</strong>
                                {" Periodically capture snapshots of your homepage or key landing pages to \
                                  monitor for uptime, visual errors, or unauthorized changes. Create a \
                                  visual archive of your website's evolution over time."}
                            </li>
                            <li>
                                <strong>{"Customer Support:"}</strong>
                                {" Allow support agents to quickly capture a customer's webpage to diagnose \
                                  issues without needing to ask the customer for a manual screenshot."}
                            </li>
                            <li>
                                <strong>{"Content Management Systems (CMS):"}</strong>
                                {" Provide content editors with visual previews of pages and posts directly \
                                  within the admin dashboard."}
                            </li>
                            <li>
                                <strong>{"Portfolio & Showcase Generation:"}</strong>
                                {" If you run a web design agency or a directory of websites, you can \
                                  automatically generate and update thumbnails for your portfolio items."}
                            </li>
                        </ul>
                    </section>

                    <section id="api-considerations">
                        <h3>{"Choosing a Screenshot API: Key Considerations & Rate Limits"}</h3>
                        <p>{"Not all Screenshot APIs are created equal. When choosing a service, consider the following factors:"}</p>
                        <ul>
                            <li>
                                <strong>{"Rendering Quality & Accuracy:"}</strong>
                                {" Does the API use up-to-date browser engines? Can it handle complex CSS, \
                                  JavaScript-heavy sites (like SPAs built with React or Vue), and custom \
                                  fonts correctly?"}
                            </li>
                            <li>
                                <strong>{"Speed & Performance:"}</strong>
                                {" How quickly are screenshots generated? Look for services with low \
                                  latency, especially if you need real-time generation."}
                            </li>
                            <li>
                                <strong>{"Customization Options:"}</strong>
                                {" What parameters can you control? Look for viewport size, full-page \
                                  capture, device emulation (mobile, tablet, desktop), image format, \
                                  quality/compression levels, and the ability to inject custom scripts or \
                                  hide elements."}
                            </li>
                            <li>
                                <strong>{"Reliability & Scalability:"}</strong>
                                {" Does the service have high uptime? Can it handle your expected volume of \
                                  requests, from a few hundred to millions per month?"}
                            </li>
                            <li>
                                <strong>{"Security:"}</strong>
                                {" How does the service handle the data? Are the browser instances properly \
                                  sandboxed and isolated?"}
                            </li>
                        </ul>
                        <p>
                            <strong>{"Understanding API Rate Limits:"}</strong>
                            {" Nearly all API services, including free and paid tiers, implement rate limits \
                              to ensure fair usage and prevent abuse. A rate limit is a cap on the number of \
                              requests you can make in a given time period (e.g., 100 requests per month on \
                              a free plan, or 10 requests per minute on a paid plan). It's crucial to \
                              understand these limits when building your application. If you expect high \
                              traffic, you may need to implement a caching strategy, storing generated \
                              thumbnails on your own server or a CDN for a certain period, to avoid hitting \
                              your rate limit and incurring extra costs."}
                        </p>
                    </section>

                    <section id="data-table">
                        <h3>{"Data Deep Dive: Screenshot Resolutions vs. File Sizes"}</h3>
                        <p>
                            {"The resolution and format of your thumbnail significantly impact its file \
                              size, which in turn affects page load times and storage costs. Here is a \
                              comparison table illustrating typical file sizes for a visually complex \
                              website captured in different formats and resolutions. (Note: Actual sizes \
                              will vary greatly based on page content.)"}
                        </p>
                        <table>
                            <thead>
                                <tr>
                                    <th>{"Resolution (Viewport)"}</th>
                                    <th>{"Use Case"}</th>
                                    <th>{"Format: PNG (Lossless)"}</th>
                                    <th>{"Format: JPEG (85% Quality)"}</th>
                                    <th>{"Format: WebP (85% Quality)"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                <tr>
                                    <td>{"600 x 315 px"}</td>
                                    <td>{"Small Link Preview (e.g., Twitter Card)"}</td>
                                    <td>{"~150 KB"}</td>
                                    <td>{"~45 KB"}</td>
                                    <td>{"~35 KB"}</td>
                                </tr>
                                <tr>
                                    <td>{"1280 x 720 px"}</td>
                                    <td>{"HD Preview, Blog Hero"}</td>
                                    <td>{"~700 KB"}</td>
                                    <td>{"~180 KB"}</td>
                                    <td>{"~140 KB"}</td>
                                </tr>
                                <tr>
                                    <td>{"1920 x 1080 px"}</td>
                                    <td>{"Full Desktop View"}</td>
                                    <td>{"~1.2 MB"}</td>
                                    <td>{"~350 KB"}</td>
                                    <td>{"~280 KB"}</td>
                                </tr>
                                <tr>
                                    <td>{"1280 x 2400 px"}</td>
                                    <td>{"Full Page (Desktop)"}</td>
                                    <td>{"~2.5 MB"}</td>
                                    <td>{"~800 KB"}</td>
                                    <td>{"~650 KB"}</td>
                                </tr>
                            </tbody>
                        </table>
                        <p>
                            {"As you can see, choosing a modern format like WebP and optimizing the \
                              resolution for the specific use case can lead to massive savings in bandwidth \
                              and faster load times for your users."}
                        </p>
                    </section>

                    <section id="faq">
                        <h3>{"Frequently Asked Questions (FAQ)"}</h3>
                        <dl>
                            <dt>{"Why can't I take a screenshot of a website directly in the browser with JavaScript?"}</dt>
                            <dd>
                                {"Browsers enforce strict security policies, like the Same-Origin Policy and \
                                  Content Security Policy (CSP), to prevent malicious scripts from stealing \
                                  user data. These policies block a script from one domain (your website) \
                                  from accessing the content of another domain (the target website loaded in \
                                  an iframe or canvas), a process known as Cross-Origin Resource Sharing \
                                  (CORS) restriction. This is a fundamental security feature of the web."}
                            </dd>

                            <dt>{"What is a Screenshot API?"}</dt>
                            <dd>
                                {"A Screenshot API is a specialized web service that takes a URL as input \
                                  and returns a high-quality image (screenshot) of that webpage. These \
                                  services run powerful, automated browsers in a secure server environment, \
                                  bypassing the client-side security restrictions you'd face in a user's \
                                  browser. They handle all the rendering, timing, and image capture \
                                  complexities for you."}
                            </dd>

                            <dt>{"What are the common use cases for website thumbnails?"}</dt>
                            <dd>
                                {"Website thumbnails are used for social media link previews (e.g., on \
                                  Twitter, Facebook), enriching search engine results, automated website \
                                  monitoring, visual feedback in web development, creating portfolios, and \
                                  enhancing user experience in bookmarking or history features."}
                            </dd>

                            <dt>{"Are Screenshot APIs free?"}</dt>
                            <dd>
                                {"Most Screenshot APIs offer a limited free tier that is suitable for small \
                                  projects or testing. For higher volumes, custom features, and better \
                                  performance, they typically offer various paid subscription plans based on \
                                  the number of API calls per month."}
                            </dd>

                            <dt>{"What's the difference between \"viewport\" and \"full page\" screenshots?"}</dt>
                            <dd>
                                {"A \"viewport\" screenshot captures only the visible portion of the website \
                                  on a specific screen size (e.g., what you see on a 1920x1080 monitor \
                                  without scrolling). A \"full page\" screenshot captures the entire webpage \
                                  from top to bottom, as if you scrolled through all its content and \
                                  stitched it together into one tall image."}
                            </dd>
                        </dl>
                    </section>
                </article>

                {
                    if !*expanded {
                        html! { <div class="article-fade"></div> }
                    } else {
                        html! {}
                    }
                }
            </div>

            <div class="article-toggle">
                <button onclick={toggle}>
                    { if *expanded { "Show Less" } else { "Read More" } }
                </button>
            </div>

            <style>
                {r#"
                .article-panel {
                    background: rgba(0, 0, 0, 0.3);
                    backdrop-filter: blur(4px);
                    border: 1px solid #1f2937;
                    border-radius: 1rem;
                    padding: 2.5rem 1.5rem;
                    box-shadow: 0 25px 50px -12px rgba(168, 85, 247, 0.1);
                }

                .article-window {
                    position: relative;
                    overflow: hidden;
                    max-height: 10rem;
                    transition: max-height 0.7s ease-in-out;
                }

                .article-window.expanded {
                    max-height: 10000px;
                }

                .article-window article {
                    max-width: 56rem;
                    margin: 0 auto;
                    color: #d1d5db;
                    line-height: 1.75;
                }

                .article-window h2 {
                    font-size: 2rem;
                    color: #22d3ee;
                    margin-bottom: 1.5rem;
                }

                .article-window h3 {
                    font-size: 1.5rem;
                    color: #22d3ee;
                    margin: 2rem 0 1rem 0;
                }

                .article-window p,
                .article-window ul,
                .article-window ol,
                .article-window dl {
                    margin-bottom: 1.25rem;
                }

                .article-window ul,
                .article-window ol {
                    padding-left: 1.5rem;
                }

                .article-window li {
                    margin-bottom: 0.5rem;
                }

                .article-window strong {
                    color: #ffffff;
                }

                .article-window a {
                    color: #c084fc;
                    text-decoration: none;
                }

                .article-window a:hover {
                    color: #d8b4fe;
                }

                .article-window blockquote {
                    border-left: 4px solid #06b6d4;
                    padding-left: 1rem;
                    font-style: italic;
                    margin: 1.5rem 0;
                }

                .article-window table {
                    width: 100%;
                    border-collapse: collapse;
                    border: 1px solid #4b5563;
                    margin: 1.5rem 0;
                }

                .article-window th,
                .article-window td {
                    padding: 0.5rem;
                    text-align: left;
                }

                .article-window th {
                    border-bottom: 2px solid #4b5563;
                }

                .article-window td {
                    border-bottom: 1px solid #374151;
                }

                .article-window dt {
                    font-weight: 700;
                    color: #ffffff;
                    margin-top: 1rem;
                }

                .article-window dd {
                    margin: 0.5rem 0 0 0;
                }

                .article-fade {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    width: 100%;
                    height: 6rem;
                    background: linear-gradient(to top, #111827, rgba(17, 24, 39, 0.8), transparent);
                    pointer-events: none;
                }

                .article-toggle {
                    text-align: center;
                    margin-top: 1.5rem;
                }

                .article-toggle button {
                    background: linear-gradient(90deg, #9333ea, #1d4ed8);
                    color: #ffffff;
                    font-weight: 700;
                    border: none;
                    border-radius: 0.5rem;
                    padding: 0.75rem 2rem;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: transform 0.3s;
                }

                .article-toggle button:hover {
                    transform: scale(1.05);
                }
                "#}
            </style>
        </section>
    }
}
