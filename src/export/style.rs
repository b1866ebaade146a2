/// Base stylesheet embedded in every document.
///
/// Colors, fonts and sizes come from the CSS custom properties set by
/// [`super::theme::AppliedTheme::to_css`]; the fallbacks here apply when a
/// theme leaves a value empty.
pub fn get_base_style() -> &'static str {
    BASE_STYLE
}

const BASE_STYLE: &str = r#"
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
            font-size: var(--font-size-base, 16px);
            line-height: 1.6;
            background: var(--background-color, #ffffff);
            color: var(--text-color, #1f2937);
        }
        h1, h2, h3, h4 {
            font-family: var(--heading-font-family, inherit);
            line-height: 1.2;
        }
        a { color: var(--primary-color, #6366f1); text-decoration: none; }
        img { max-width: 100%; display: block; }
        .container {
            max-width: var(--container-max-width, 1200px);
            margin: 0 auto;
            padding: 0 1.5rem;
        }
        .section { padding: var(--section-padding, 6rem) 0; position: relative; }
        .section-intro { text-align: center; margin-bottom: 3rem; }
        .section-heading { font-size: 2.5rem; margin: 1rem 0; }
        .section-description {
            max-width: 48rem;
            margin: 0 auto;
            color: var(--muted-color, #6b7280);
            font-size: 1.125rem;
        }
        .badge {
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
            padding: 0.4rem 1rem;
            border-radius: 999px;
            font-size: 0.875rem;
            font-weight: 600;
            color: var(--primary-color, #6366f1);
            background: color-mix(in srgb, var(--primary-color, #6366f1) 12%, transparent);
        }
        .icon { display: inline-block; width: 1em; height: 1em; }
        .text-gradient {
            background: linear-gradient(to right, var(--primary-color, #6366f1), var(--secondary-color, #8b5cf6));
            -webkit-background-clip: text;
            background-clip: text;
            color: transparent;
        }

        /* Buttons */
        .btn {
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
            padding: 0.85rem 1.75rem;
            border-radius: var(--radius-medium, 12px);
            font-weight: 700;
            border: 2px solid transparent;
            cursor: pointer;
            transition: transform 0.2s ease;
        }
        .btn:hover { transform: translateY(-2px); }
        .btn-primary { background: var(--primary-color, #6366f1); color: #ffffff; }
        .btn-secondary { background: var(--secondary-color, #8b5cf6); color: #ffffff; }
        .btn-gradient {
            background: linear-gradient(to right, var(--primary-color, #6366f1), var(--secondary-color, #8b5cf6));
            color: #ffffff;
        }
        .btn-glass {
            background: rgba(0, 0, 0, 0.35);
            border-color: rgba(255, 255, 255, 0.3);
            color: #ffffff;
            backdrop-filter: blur(10px);
        }
        .btn-outline {
            border-color: var(--primary-color, #6366f1);
            color: var(--primary-color, #6366f1);
            background: transparent;
        }

        /* Header */
        .site-header { top: 0; left: 0; right: 0; z-index: 50; background: #ffffff; box-shadow: 0 1px 6px rgba(0, 0, 0, 0.08); }
        .site-header-fixed { position: fixed; }
        .site-header-sticky { position: sticky; }
        .site-header-static { position: static; }
        .site-header-transparent { background: transparent; box-shadow: none; }
        .header-bar { display: flex; align-items: center; justify-content: space-between; gap: 2rem; padding-top: 1rem; padding-bottom: 1rem; }
        .brand { display: flex; align-items: center; gap: 0.75rem; color: inherit; }
        .brand .logo { height: 3rem; width: auto; }
        .logo-text { font-size: 1.5rem; font-weight: 700; color: var(--primary-color, #6366f1); }
        .brand-tagline { font-size: 0.75rem; color: var(--muted-color, #6b7280); }
        .nav-items { display: flex; gap: 2rem; list-style: none; }
        .nav-item { position: relative; }
        .nav-item a { color: var(--text-color, #1f2937); font-weight: 500; }
        .nav-item a:hover { color: var(--primary-color, #6366f1); }
        .nav-dropdown {
            display: none;
            position: absolute;
            top: 100%;
            left: 0;
            min-width: 12rem;
            padding: 0.5rem 1rem;
            list-style: none;
            background: #ffffff;
            border-radius: var(--radius-small, 6px);
            box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);
        }
        .dropdown:hover > .nav-dropdown { display: block; }

        /* Hero */
        .hero {
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            text-align: center;
            color: #ffffff;
            background-size: cover;
            background-position: center;
            overflow: hidden;
        }
        .hero-overlay { position: absolute; inset: 0; opacity: 0.85; }
        .hero-content { position: relative; z-index: 1; }
        .hero-badge { color: #ffffff; background: rgba(0, 0, 0, 0.5); margin-bottom: 2rem; }
        .hero-heading { font-size: clamp(2.5rem, 7vw, 5.5rem); font-weight: 800; margin-bottom: 1.5rem; }
        .hero-heading .text-gradient { display: block; }
        .hero-subheading { font-size: 1.35rem; max-width: 48rem; margin: 0 auto 3rem; opacity: 0.95; }
        .hero-ctas { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; margin-bottom: 4rem; }
        .hero-features { display: flex; flex-wrap: wrap; gap: 1.5rem; justify-content: center; list-style: none; }
        .hero-feature { display: flex; align-items: center; gap: 0.5rem; padding: 0.5rem 1rem; border-radius: var(--radius-small, 6px); background: rgba(0, 0, 0, 0.4); font-weight: 600; }
        .scroll-indicator { position: absolute; bottom: 2rem; left: 50%; transform: translateX(-50%); font-size: 0.75rem; opacity: 0.7; }
        .scroll-mouse { display: block; width: 1.5rem; height: 2.5rem; margin: 0 auto 0.5rem; border: 2px solid rgba(255, 255, 255, 0.5); border-radius: 999px; }

        /* Card grid */
        .cards { display: grid; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); gap: 2rem; }
        .card {
            position: relative;
            overflow: hidden;
            background: #ffffff;
            border: 1px solid #f3f4f6;
            border-radius: var(--radius-large, 16px);
            box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
            transition: transform 0.3s ease;
        }
        .card:hover { transform: translateY(-8px); }
        .card-featured {
            position: absolute;
            top: 1rem;
            right: 1rem;
            z-index: 1;
            padding: 0.25rem 0.75rem;
            border-radius: 999px;
            font-size: 0.75rem;
            font-weight: 700;
            color: #ffffff;
            background: linear-gradient(to right, var(--secondary-color, #8b5cf6), var(--primary-color, #6366f1));
        }
        .card-media { height: 14rem; overflow: hidden; }
        .card-media img { width: 100%; height: 100%; object-fit: cover; }
        .card-body { padding: 1.5rem; }
        .card-title { font-size: 1.5rem; margin-bottom: 0.75rem; }
        .card-subtitle { font-size: 0.875rem; font-weight: 500; color: var(--muted-color, #6b7280); margin-bottom: 0.5rem; }
        .card-description { color: var(--muted-color, #6b7280); margin-bottom: 1.5rem; }
        .card-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; list-style: none; margin-bottom: 1rem; }
        .tag { font-size: 0.75rem; padding: 0.2rem 0.6rem; border-radius: 999px; background: #f3f4f6; }
        .card-footer { display: flex; align-items: center; justify-content: space-between; padding-top: 1rem; border-top: 1px solid #f3f4f6; }
        .card-metadata-label { font-size: 0.75rem; color: var(--muted-color, #6b7280); }
        .card-metadata-value { font-size: 1.75rem; font-weight: 700; }
        .card-grid-footer { text-align: center; margin-top: 4rem; }
        .card-grid-footer p { margin-bottom: 1.5rem; color: var(--muted-color, #6b7280); }

        /* About */
        .about-layout { display: grid; grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr)); gap: 4rem; align-items: center; }
        .about-layout .section-intro { text-align: left; }
        .mission { display: flex; gap: 1rem; padding: 1.5rem; border-radius: var(--radius-medium, 12px); background: #f9fafb; margin-bottom: 2rem; }
        .mission-heading { margin-bottom: 0.5rem; }
        .stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(8rem, 1fr)); gap: 1.5rem; }
        .stat-value { font-size: 2rem; font-weight: 800; color: var(--primary-color, #6366f1); }
        .stat-label { color: var(--muted-color, #6b7280); }
        .about-media { position: relative; }
        .about-media img { border-radius: var(--radius-large, 16px); }
        .experience {
            position: absolute;
            bottom: -1.5rem;
            left: -1.5rem;
            padding: 1.25rem 1.5rem;
            border-radius: var(--radius-medium, 12px);
            color: #ffffff;
            background: linear-gradient(135deg, var(--primary-color, #6366f1), var(--secondary-color, #8b5cf6));
        }
        .experience-years { display: block; font-size: 2.25rem; font-weight: 800; }

        /* Contact */
        .contact-cards { display: grid; grid-template-columns: repeat(auto-fit, minmax(15rem, 1fr)); gap: 2rem; margin-bottom: 4rem; }
        .contact-card { padding: 2rem; text-align: center; border-radius: var(--radius-large, 16px); background: #ffffff; box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08); }
        .contact-icon { display: inline-flex; align-items: center; justify-content: center; width: 4rem; height: 4rem; margin-bottom: 1rem; border-radius: var(--radius-medium, 12px); color: #ffffff; }
        .contact-label { margin-bottom: 0.5rem; }
        .contact-value { color: var(--muted-color, #6b7280); word-break: break-word; }
        .contact-cta { text-align: center; padding: 3rem 2rem; border-radius: var(--radius-large, 16px); background: #f9fafb; }
        .contact-cta p { margin: 1rem 0 2rem; color: var(--muted-color, #6b7280); }

        /* Footer */
        .site-footer { background: #111827; color: #ffffff; padding: 3rem 0; }
        .site-footer a { color: #9ca3af; }
        .site-footer a:hover { color: var(--primary-color, #6366f1); }
        .footer-columns { display: grid; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); gap: 2rem; margin-bottom: 2rem; }
        .footer-brand { font-size: 1.5rem; color: var(--primary-color, #6366f1); margin-bottom: 1rem; }
        .footer-column p { color: #9ca3af; }
        .footer-column h4 { margin-bottom: 1rem; }
        .footer-links { list-style: none; }
        .social-links { display: flex; gap: 1rem; }
        .social-link { display: inline-flex; align-items: center; justify-content: center; width: 2.5rem; height: 2.5rem; border-radius: 999px; background: rgba(255, 255, 255, 0.1); }
        .newsletter { display: flex; flex-wrap: wrap; align-items: center; gap: 1rem; margin-bottom: 2rem; }
        .newsletter input { flex: 1; min-width: 14rem; padding: 0.75rem 1rem; border: none; border-radius: var(--radius-small, 6px); }
        .newsletter button { padding: 0.75rem 1.5rem; border: none; border-radius: var(--radius-small, 6px); background: var(--primary-color, #6366f1); color: #ffffff; cursor: pointer; }
        .footer-bottom { padding-top: 2rem; border-top: 1px solid #1f2937; text-align: center; color: #9ca3af; }
        .footer-bottom-links { display: flex; justify-content: center; gap: 1.5rem; list-style: none; margin-top: 0.5rem; }

        /* Status pages */
        .status-page { min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #f9fafb; }
        .status-card { max-width: 28rem; width: 100%; padding: 2rem; text-align: center; border-radius: var(--radius-medium, 12px); background: #ffffff; box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08); }
        .status-text { margin: 1rem 0; color: #4b5563; }
        .status-icon { display: inline-flex; align-items: center; justify-content: center; width: 4rem; height: 4rem; border-radius: 999px; background: #fee2e2; color: #dc2626; font-size: 2rem; font-weight: 800; }
        .status-message { margin-bottom: 1rem; padding: 1rem; border-radius: 8px; background: #f3f4f6; color: #dc2626; font-size: 0.875rem; white-space: pre-wrap; text-align: left; }
        .spinner {
            display: inline-block;
            width: 4rem;
            height: 4rem;
            border: 4px solid #3b82f6;
            border-top-color: transparent;
            border-radius: 50%;
            animation: spin 1s linear infinite;
        }
        @keyframes spin { to { transform: rotate(360deg); } }
"#;
